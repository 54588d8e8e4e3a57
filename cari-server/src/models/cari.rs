//! Cari (current account) input validation

use serde::Deserialize;

use super::validation::{optional, required};
use super::ValidationError;

const MAX_KOD_LEN: usize = 32;
const MAX_AD_LEN: usize = 255;
const MAX_TIP_LEN: usize = 32;
const MAX_TELEFON_LEN: usize = 32;
const MAX_PLACE_LEN: usize = 64;

/// Validated cari code, unique across `cari_main`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CariKod(String);

impl CariKod {
    /// Trim and validate a code.
    ///
    /// # Example
    /// ```
    /// use cari_server::models::CariKod;
    ///
    /// assert_eq!(CariKod::new(" C001 ").unwrap().as_str(), "C001");
    /// assert!(CariKod::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        required("kod", s, MAX_KOD_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CariKod {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// POST /cari/main body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCariRequest {
    pub kod: String,
    pub ad: String,
    pub tip: String,
    #[serde(default)]
    pub telefon: Option<String>,
    #[serde(default)]
    pub il: Option<String>,
    #[serde(default)]
    pub ilce: Option<String>,
}

/// Validated cari record ready for insert
#[derive(Debug, Clone)]
pub struct NewCari {
    pub kod: CariKod,
    pub ad: String,
    pub tip: String,
    pub telefon: Option<String>,
    pub il: Option<String>,
    pub ilce: Option<String>,
}

impl TryFrom<CreateCariRequest> for NewCari {
    type Error = ValidationError;

    fn try_from(req: CreateCariRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            kod: CariKod::new(&req.kod)?,
            ad: required("ad", &req.ad, MAX_AD_LEN)?,
            tip: required("tip", &req.tip, MAX_TIP_LEN)?,
            telefon: optional("telefon", req.telefon.as_deref(), MAX_TELEFON_LEN)?,
            il: optional("il", req.il.as_deref(), MAX_PLACE_LEN)?,
            ilce: optional("ilce", req.ilce.as_deref(), MAX_PLACE_LEN)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CreateCariRequest {
        serde_json::from_str(json).expect("valid json")
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let req = parse(r#"{"kod":"C001","ad":"Acme","tip":"musteri"}"#);
        let cari = NewCari::try_from(req).unwrap();
        assert_eq!(cari.kod.as_str(), "C001");
        assert!(cari.telefon.is_none());
        assert!(cari.il.is_none());
        assert!(cari.ilce.is_none());
    }

    #[test]
    fn fields_are_trimmed() {
        let req = parse(
            r#"{"kod":" C002 ","ad":" Acme ","tip":"tedarikci","telefon":"","il":"Izmir","ilce":" Bornova "}"#,
        );
        let cari = NewCari::try_from(req).unwrap();
        assert_eq!(cari.kod.as_str(), "C002");
        assert_eq!(cari.ad, "Acme");
        assert_eq!(cari.telefon, None);
        assert_eq!(cari.il.as_deref(), Some("Izmir"));
        assert_eq!(cari.ilce.as_deref(), Some("Bornova"));
    }

    #[test]
    fn rejects_blank_required_fields() {
        let err = NewCari::try_from(parse(r#"{"kod":"","ad":"Acme","tip":"musteri"}"#)).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "kod" }));

        let err = NewCari::try_from(parse(r#"{"kod":"C1","ad":"  ","tip":"musteri"}"#)).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "ad" }));
    }

    #[test]
    fn rejects_long_kod() {
        let err = CariKod::new(&"K".repeat(33)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { field: "kod", max: 32 }));
    }

    #[test]
    fn missing_required_field_fails_to_deserialize() {
        assert!(serde_json::from_str::<CreateCariRequest>(r#"{"kod":"C1","ad":"A"}"#).is_err());
    }
}

use serde::{Deserialize, Serialize};

/// Billing fields of the payment form. Only email is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingDetails {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl BillingDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Email, if one was entered.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().map(str::trim).filter(|e| !e.is_empty())
    }

    /// Required fields that are blank.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("address", &self.address),
            ("city", &self.city),
            ("postal code", &self.postal_code),
            ("country", &self.country),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields() {
        let billing = BillingDetails {
            first_name: "Asha".into(),
            city: " ".into(),
            ..Default::default()
        };
        assert_eq!(
            billing.missing(),
            vec!["last name", "address", "city", "postal code", "country"]
        );
        assert!(!billing.is_complete());
    }

    #[test]
    fn test_email_is_optional() {
        let billing = BillingDetails {
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            email: Some("".into()),
            address: "1 MG Road".into(),
            city: "Pune".into(),
            postal_code: "411001".into(),
            country: "IN".into(),
        };
        assert!(billing.is_complete());
        assert_eq!(billing.email(), None);
        assert_eq!(billing.full_name(), "Asha Rao");
    }
}

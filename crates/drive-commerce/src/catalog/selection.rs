use chrono::{DateTime, Utc};

use crate::catalog::{FeatureSet, Vehicle};
use crate::ids::VariantTypeId;
use crate::CommerceError;

/// Detail-page selection: a variant type, its resolved price and a booking
/// date.
///
/// The price is recomputed from the vehicle's price list on every variant
/// change and is never carried over from the previous variant.
#[derive(Debug, Clone)]
pub struct VariantSelector {
    vehicle: Vehicle,
    variant: Option<VariantTypeId>,
    price: Option<f64>,
    date: DateTime<Utc>,
}

/// A complete selection, ready to become a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSelection {
    pub vehicle: Vehicle,
    pub variant: VariantTypeId,
    pub variant_name: String,
    pub date: DateTime<Utc>,
    pub price: f64,
    pub features: Vec<FeatureSet>,
}

impl VariantSelector {
    /// Start with no variant selected and the date set to `now`.
    pub fn new(vehicle: Vehicle, now: DateTime<Utc>) -> Self {
        Self {
            vehicle,
            variant: None,
            price: None,
            date: now,
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Select a variant type (or clear the selection with `None` or an
    /// empty id) and return the resolved price.
    pub fn select_variant(&mut self, variant: Option<VariantTypeId>) -> Option<f64> {
        self.price = None;
        self.variant = variant.filter(|id| !id.as_str().is_empty());
        self.price = self
            .variant
            .as_ref()
            .and_then(|id| self.vehicle.price_for(id));
        tracing::debug!(
            vehicle = %self.vehicle.id,
            variant = ?self.variant,
            price = ?self.price,
            "variant selected"
        );
        self.price
    }

    /// Select a variant by id or name.
    pub fn select_variant_named(&mut self, needle: &str) -> Result<Option<f64>, CommerceError> {
        let id = self
            .vehicle
            .find_variant(needle)
            .map(|t| t.id.clone())
            .ok_or_else(|| CommerceError::VariantNotFound(needle.to_string()))?;
        Ok(self.select_variant(Some(id)))
    }

    /// Set the booking date. Dates before `now` are rejected and leave the
    /// current date in place.
    pub fn select_date(
        &mut self,
        date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<(), CommerceError> {
        if date < now {
            return Err(CommerceError::DateInPast {
                requested: date.to_rfc3339(),
                floor: now.to_rfc3339(),
            });
        }
        self.date = date;
        Ok(())
    }

    pub fn variant(&self) -> Option<&VariantTypeId> {
        self.variant.as_ref()
    }

    pub fn variant_name(&self) -> Option<&str> {
        self.variant
            .as_ref()
            .and_then(|id| self.vehicle.variant_type(id))
            .map(|t| t.name.as_str())
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Feature sets of the selected variant; empty without a selection.
    pub fn selected_features(&self) -> Vec<&FeatureSet> {
        match &self.variant {
            Some(id) => self.vehicle.features_for(id),
            None => Vec::new(),
        }
    }

    /// Whether the Book action is enabled.
    pub fn can_book(&self) -> bool {
        self.variant.is_some() && self.price.is_some()
    }

    /// What is still missing before a booking can be made.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.variant.is_none() {
            missing.push("variant");
        }
        if self.price.is_none() {
            missing.push("price");
        }
        missing
    }

    /// Freeze the selection for submission.
    pub fn to_selection(&self) -> Result<BookingSelection, CommerceError> {
        let (Some(variant), Some(price)) = (self.variant.clone(), self.price) else {
            return Err(CommerceError::IncompleteSelection(self.missing().join(", ")));
        };
        Ok(BookingSelection {
            variant_name: self.variant_name().unwrap_or_default().to_string(),
            features: self.selected_features().into_iter().cloned().collect(),
            vehicle: self.vehicle.clone(),
            variant,
            date: self.date,
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sedan;
    use chrono::Duration;

    #[test]
    fn test_variant_change_recomputes_price() {
        let now = Utc::now();
        let mut selector = VariantSelector::new(sedan(), now);
        assert_eq!(selector.select_variant(Some("t1".into())), Some(500000.0));
        assert_eq!(selector.select_variant(Some("t2".into())), Some(650000.0));
        assert_eq!(selector.variant_name(), Some("Sport"));
    }

    #[test]
    fn test_variant_without_price_clears_previous_price() {
        let mut selector = VariantSelector::new(sedan(), Utc::now());
        selector.select_variant(Some("t1".into()));
        assert_eq!(selector.select_variant(Some("t9".into())), None);
        assert_eq!(selector.price(), None);
        assert!(!selector.can_book());
    }

    #[test]
    fn test_empty_selection_clears_variant() {
        let mut selector = VariantSelector::new(sedan(), Utc::now());
        selector.select_variant(Some("t1".into()));
        assert_eq!(selector.select_variant(Some("".into())), None);
        assert!(selector.variant().is_none());
        assert!(selector.selected_features().is_empty());
        assert_eq!(selector.missing(), vec!["variant", "price"]);
    }

    #[test]
    fn test_select_variant_named() {
        let mut selector = VariantSelector::new(sedan(), Utc::now());
        assert_eq!(selector.select_variant_named("base").unwrap(), Some(500000.0));
        assert!(matches!(
            selector.select_variant_named("Luxury"),
            Err(CommerceError::VariantNotFound(_))
        ));
    }

    #[test]
    fn test_past_date_rejected_and_prior_kept() {
        let now = Utc::now();
        let mut selector = VariantSelector::new(sedan(), now);
        let later = now + Duration::days(3);
        selector.select_date(later, now).unwrap();

        let err = selector.select_date(now - Duration::days(1), now).unwrap_err();
        assert!(matches!(err, CommerceError::DateInPast { .. }));
        assert_eq!(selector.date(), later);
    }

    #[test]
    fn test_to_selection_requires_price() {
        let mut selector = VariantSelector::new(sedan(), Utc::now());
        assert!(matches!(
            selector.to_selection(),
            Err(CommerceError::IncompleteSelection(_))
        ));

        selector.select_variant(Some("t1".into()));
        let selection = selector.to_selection().unwrap();
        assert_eq!(selection.price, 500000.0);
        assert_eq!(selection.variant_name, "Base");
        assert_eq!(selection.features.len(), 1);
    }
}

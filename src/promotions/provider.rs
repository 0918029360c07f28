//! Promotion Provider

use tracing::{debug, info};

use crate::{
    promotions::{Promotion, PromotionError, PromotionKind, find_promotion},
    seed::PromotionRecord,
};

/// Builds and owns the promotion rules configured for a storefront.
#[derive(Debug, Clone, Default)]
pub struct PromotionProvider {
    source: Vec<PromotionRecord>,
    promotions: Vec<Promotion>,
}

impl PromotionProvider {
    /// Create a new provider over the given promotion configuration.
    pub fn new(source: Vec<PromotionRecord>) -> Self {
        Self {
            source,
            promotions: Vec::new(),
        }
    }

    /// Build one active promotion per configuration entry, replacing any previous set.
    ///
    /// # Errors
    ///
    /// Returns [`PromotionError::UnknownPromotionType`] if an entry names a type that does
    /// not exist. The provider is left without any promotions in that case.
    #[tracing::instrument(
        name = "promotions.load",
        skip(self),
        fields(entries = self.source.len()),
        err
    )]
    pub fn load(&mut self) -> Result<(), PromotionError> {
        self.promotions.clear();

        let promotions = self
            .source
            .iter()
            .map(|record| {
                record
                    .kind
                    .parse::<PromotionKind>()
                    .map(|kind| Promotion::new(record.sku.clone(), kind))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.promotions = promotions;

        info!(promotions = self.promotions.len(), "loaded promotions");

        Ok(())
    }

    /// All loaded promotions, in configuration order.
    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    /// Look up the promotion for a SKU.
    pub fn promotion_for_sku(&self, sku: &str) -> Option<&Promotion> {
        find_promotion(&self.promotions, sku)
    }

    /// Switch the promotion for a SKU on or off.
    ///
    /// Returns `false` if no promotion exists for the SKU.
    pub fn set_active(&mut self, sku: &str, active: bool) -> bool {
        let Some(promotion) = self.promotion_for_sku_mut(sku) else {
            return false;
        };

        promotion.set_active(active);

        debug!(%sku, active, "set promotion activation");

        true
    }

    /// Flip the promotion for a SKU, returning its new state.
    pub fn toggle(&mut self, sku: &str) -> Option<bool> {
        let promotion = self.promotion_for_sku_mut(sku)?;
        let active = !promotion.is_active();

        promotion.set_active(active);

        debug!(%sku, active, "toggled promotion");

        Some(active)
    }

    fn promotion_for_sku_mut(&mut self, sku: &str) -> Option<&mut Promotion> {
        self.promotions
            .iter_mut()
            .find(|promo| *promo.sku() == *sku)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn provider() -> PromotionProvider {
        PromotionProvider::new(vec![
            PromotionRecord::new("A0002", "buyOneGetOneFree"),
            PromotionRecord::new("A0001", "tenPercentOff"),
        ])
    }

    #[test]
    fn empty_before_load() {
        let promotions = provider();

        assert!(promotions.promotions().is_empty());
        assert!(promotions.promotion_for_sku("A0002").is_none());
    }

    #[test]
    fn load_builds_active_promotions_in_order() -> TestResult {
        let mut promotions = provider();
        promotions.load()?;

        let kinds: Vec<PromotionKind> = promotions
            .promotions()
            .iter()
            .map(Promotion::kind)
            .collect();

        assert_eq!(
            kinds,
            [PromotionKind::BuyOneGetOneFree, PromotionKind::TenPercentOff]
        );
        assert!(promotions.promotions().iter().all(Promotion::is_active));

        Ok(())
    }

    #[test]
    fn load_rejects_unknown_type_without_partial_list() {
        let mut promotions = PromotionProvider::new(vec![
            PromotionRecord::new("A0002", "buyOneGetOneFree"),
            PromotionRecord::new("A0001", "halfPrice"),
        ]);

        let result = promotions.load();

        assert_eq!(
            result,
            Err(PromotionError::UnknownPromotionType("halfPrice".to_string()))
        );
        assert!(promotions.promotions().is_empty());
    }

    #[test]
    fn failed_reload_discards_previous_promotions() -> TestResult {
        let mut promotions = provider();
        promotions.load()?;

        promotions.source.push(PromotionRecord::new("A0003", "mystery"));

        assert!(promotions.load().is_err());
        assert!(promotions.promotions().is_empty());

        Ok(())
    }

    #[test]
    fn reload_resets_activation() -> TestResult {
        let mut promotions = provider();
        promotions.load()?;

        assert!(promotions.set_active("A0001", false));

        promotions.load()?;

        assert_eq!(
            promotions.promotion_for_sku("A0001").map(Promotion::is_active),
            Some(true)
        );

        Ok(())
    }

    #[test]
    fn promotion_for_sku_finds_matching_rule() -> TestResult {
        let mut promotions = provider();
        promotions.load()?;

        assert_eq!(
            promotions.promotion_for_sku("A0001").map(Promotion::kind),
            Some(PromotionKind::TenPercentOff)
        );
        assert!(promotions.promotion_for_sku("A0003").is_none());

        Ok(())
    }

    #[test]
    fn set_active_updates_matching_rule_only() -> TestResult {
        let mut promotions = provider();
        promotions.load()?;

        assert!(promotions.set_active("A0002", false));

        assert_eq!(
            promotions.promotion_for_sku("A0002").map(Promotion::is_active),
            Some(false)
        );
        assert_eq!(
            promotions.promotion_for_sku("A0001").map(Promotion::is_active),
            Some(true)
        );

        Ok(())
    }

    #[test]
    fn set_active_reports_missing_rule() -> TestResult {
        let mut promotions = provider();
        promotions.load()?;

        assert!(!promotions.set_active("A0003", false));

        Ok(())
    }

    #[test]
    fn toggle_flips_and_returns_new_state() -> TestResult {
        let mut promotions = provider();
        promotions.load()?;

        assert_eq!(promotions.toggle("A0001"), Some(false));
        assert_eq!(promotions.toggle("A0001"), Some(true));
        assert_eq!(promotions.toggle("A0003"), None);

        Ok(())
    }
}

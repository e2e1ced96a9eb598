use chrono::NaiveDate;
use loyalty_core_db::models::promotion::{PromotionModel, PromotionStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct PromotionRow {
    pub promotion: PromotionModel,
    pub status: PromotionStatus,
}

pub fn promotion_rows(promotions: &[PromotionModel], today: NaiveDate) -> Vec<PromotionRow> {
    promotions
        .iter()
        .map(|p| PromotionRow {
            promotion: p.clone(),
            status: p.status_on(today),
        })
        .collect()
}

pub fn active_promotions(promotions: &[PromotionModel], today: NaiveDate) -> Vec<PromotionModel> {
    promotions
        .iter()
        .filter(|p| p.status_on(today) == PromotionStatus::Active)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::date;
    use loyalty_core_memory::fixtures::promotions::promotions;

    #[test]
    fn test_statuses_on_a_given_day() {
        let rows = promotion_rows(&promotions(), date(2024, 6, 15));
        let statuses: Vec<PromotionStatus> = rows.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![PromotionStatus::Expired, PromotionStatus::Active, PromotionStatus::Scheduled]
        );
        assert_eq!(active_promotions(&promotions(), date(2024, 6, 15)).len(), 1);
    }
}

use loyalty_core_db::models::member::MemberModel;

/// Members matching `term` by name (case-insensitive) or phone, in input
/// order. A blank term lists everyone.
pub fn search_members(members: &[MemberModel], term: &str) -> Vec<MemberModel> {
    let term = term.trim();
    members.iter().filter(|m| m.matches_search(term)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::member;
    use loyalty_core_api::domain::Tier;
    use loyalty_core_db::utils::truncated_heapless_string;

    #[test]
    fn test_search_by_name_or_phone() {
        let members = vec![
            member("Aung Kyaw Moe", Tier::Gold, |m| m.phone = truncated_heapless_string("09420011223")),
            member("Su Su Hlaing", Tier::Platinum, |m| m.phone = truncated_heapless_string("09791234567")),
        ];

        let names = |term: &str| -> Vec<String> {
            search_members(&members, term).into_iter().map(|m| m.name).collect()
        };
        assert_eq!(names("aung"), vec!["Aung Kyaw Moe"]);
        assert_eq!(names("0979"), vec!["Su Su Hlaing"]);
        assert_eq!(names("  ").len(), 2);
        assert!(names("zzz").is_empty());
    }
}

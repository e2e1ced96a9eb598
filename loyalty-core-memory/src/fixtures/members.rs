use loyalty_core_api::domain::Tier;
use loyalty_core_db::models::member::MemberModel;
use loyalty_core_db::utils::truncated_heapless_string;

use super::{date, fixture_id, mmk, timestamp, FixtureKind};

struct Seed {
    n: u32,
    name: &'static str,
    phone: &'static str,
    tier: Tier,
    points: i64,
    retail: i64,
    wholesale: i64,
    joined: (i32, u32, u32),
    last_visit: (i32, u32, u32),
    expires: (i32, u32, u32),
    visits: u32,
    birthday: bool,
    logins: u32,
    last_login: (i32, u32, u32, u32, u32),
}

const SEEDS: &[Seed] = &[
    Seed { n: 1, name: "Aung Kyaw Moe", phone: "09420011223", tier: Tier::Gold, points: 12_500, retail: 25_000_000, wholesale: 40_000_000, joined: (2022, 3, 14), last_visit: (2024, 6, 2), expires: (2025, 3, 14), visits: 24, birthday: true, logins: 58, last_login: (2024, 6, 2, 9, 30) },
    Seed { n: 2, name: "Su Su Hlaing", phone: "09791234567", tier: Tier::Platinum, points: 48_200, retail: 72_000_000, wholesale: 120_000_000, joined: (2021, 11, 2), last_visit: (2024, 5, 28), expires: (2024, 11, 2), visits: 41, birthday: false, logins: 112, last_login: (2024, 5, 30, 18, 5) },
    Seed { n: 3, name: "Min Thant Zin", phone: "09250987654", tier: Tier::Normal, points: 850, retail: 3_500_000, wholesale: 0, joined: (2024, 1, 20), last_visit: (2024, 2, 11), expires: (2025, 1, 20), visits: 3, birthday: false, logins: 7, last_login: (2024, 2, 11, 12, 0) },
    Seed { n: 4, name: "Thiri Win", phone: "09448765432", tier: Tier::Diamond, points: 156_000, retail: 180_000_000, wholesale: 610_000_000, joined: (2019, 6, 8), last_visit: (2024, 6, 1), expires: (2025, 6, 8), visits: 97, birthday: false, logins: 203, last_login: (2024, 6, 1, 20, 45) },
    Seed { n: 5, name: "Kyaw Zaw Lin", phone: "09421122334", tier: Tier::Normal, points: 0, retail: 0, wholesale: 0, joined: (2024, 5, 5), last_visit: (2024, 5, 5), expires: (2025, 5, 5), visits: 1, birthday: false, logins: 2, last_login: (2024, 5, 6, 8, 15) },
    Seed { n: 6, name: "Hnin Ei Phyu", phone: "09795544332", tier: Tier::Gold, points: 9_300, retail: 31_000_000, wholesale: 12_000_000, joined: (2023, 2, 17), last_visit: (2023, 9, 30), expires: (2024, 2, 17), visits: 15, birthday: false, logins: 58, last_login: (2023, 9, 30, 16, 20) },
    Seed { n: 7, name: "Aung Min Thu", phone: "09261239876", tier: Tier::Platinum, points: 61_750, retail: 95_000_000, wholesale: 300_000_000, joined: (2020, 8, 29), last_visit: (2024, 4, 18), expires: (2024, 8, 29), visits: 66, birthday: true, logins: 140, last_login: (2024, 4, 18, 11, 10) },
    Seed { n: 8, name: "May Thu Kyaw", phone: "09974455667", tier: Tier::Normal, points: 2_400, retail: 12_000_000, wholesale: 0, joined: (2023, 10, 1), last_visit: (2024, 3, 3), expires: (2024, 10, 1), visits: 9, birthday: false, logins: 21, last_login: (2024, 3, 3, 19, 0) },
    Seed { n: 9, name: "Zaw Htet Aung", phone: "09428899001", tier: Tier::Diamond, points: 220_400, retail: 260_000_000, wholesale: 900_000_000, joined: (2018, 12, 12), last_visit: (2024, 5, 31), expires: (2025, 12, 12), visits: 120, birthday: false, logins: 251, last_login: (2024, 5, 31, 7, 55) },
    Seed { n: 10, name: "Ei Mon Kyaw", phone: "09253344556", tier: Tier::Gold, points: 15_050, retail: 44_000_000, wholesale: 80_000_000, joined: (2022, 7, 23), last_visit: (2024, 1, 9), expires: (2024, 7, 23), visits: 28, birthday: false, logins: 36, last_login: (2024, 1, 9, 14, 40) },
];

pub fn members() -> Vec<MemberModel> {
    SEEDS
        .iter()
        .map(|seed| {
            let code = format!("M{:03}", seed.n);
            let slug = seed.name.to_lowercase().replace(' ', ".");
            MemberModel {
                id: fixture_id(FixtureKind::Member, seed.n),
                code: truncated_heapless_string(&code),
                name: seed.name.to_string(),
                email: format!("{slug}@example.com"),
                phone: truncated_heapless_string(seed.phone),
                nrc: truncated_heapless_string(&format!("12/OUKAMA(N){:06}", 100_000 + seed.n)),
                address: format!("No. {}, Pyay Road, Yangon", 10 + seed.n),
                tier: seed.tier,
                points: seed.points,
                retail_spend: mmk(seed.retail),
                wholesale_spend: mmk(seed.wholesale),
                join_date: date(seed.joined.0, seed.joined.1, seed.joined.2),
                last_visit_date: date(seed.last_visit.0, seed.last_visit.1, seed.last_visit.2),
                expiration_date: date(seed.expires.0, seed.expires.1, seed.expires.2),
                visit_frequency: seed.visits,
                is_birthday: seed.birthday,
                login_count: seed.logins,
                last_login: timestamp(
                    seed.last_login.0,
                    seed.last_login.1,
                    seed.last_login.2,
                    seed.last_login.3,
                    seed.last_login.4,
                ),
            }
        })
        .collect()
}

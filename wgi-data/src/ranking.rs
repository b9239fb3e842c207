use crate::synth::trend_and_change;
use wgi_core::observation::{ProvinceObservation, RawObservation};

/// Rank CSV rows by value, highest first, and attach synthetic trend and
/// change. The sort is stable: equal values keep their CSV order. Values are
/// compared with `total_cmp`, so a stray `NaN` ranks first instead of
/// breaking the ordering.
pub fn rank_observations(raw: &[RawObservation], dataset_id: &str) -> Vec<ProvinceObservation> {
    let non_finite = raw.iter().filter(|r| !r.value.is_finite()).count();
    if non_finite > 0 {
        log::warn!(
            "[WGI] dataset {}: ranking {} non-finite values",
            dataset_id,
            non_finite
        );
    }

    let mut sorted: Vec<&RawObservation> = raw.iter().collect();
    sorted.sort_by(|a, b| b.value.total_cmp(&a.value));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, r)| {
            let (trend, change) = trend_and_change(dataset_id, &r.province);
            ProvinceObservation {
                province: r.province.clone(),
                value: r.value,
                year: r.year.clone(),
                trend,
                change,
                rank: i + 1,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgi_core::observation::parse_observations_csv;

    #[test]
    fn test_rank_is_descending_by_value() {
        let raw = parse_observations_csv(
            "province,value,year\nAceh,6.3,2021\nBali,5.37,2021\nPapua,3.33,2021\nBanten,8.98,2021\n",
        )
        .unwrap();
        let ranked = rank_observations(&raw, "3");
        let order: Vec<&str> = ranked.iter().map(|r| r.province.as_str()).collect();
        assert_eq!(order, vec!["Banten", "Aceh", "Bali", "Papua"]);
        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        for pair in ranked.windows(2) {
            assert!(pair[0].value >= pair[1].value);
        }
    }

    #[test]
    fn test_ties_keep_csv_order() {
        let raw = parse_observations_csv("province,value,year\nB,5,2021\nA,5,2021\nC,9,2021\n").unwrap();
        let ranked = rank_observations(&raw, "1");
        let order: Vec<&str> = ranked.iter().map(|r| r.province.as_str()).collect();
        assert_eq!(order, vec!["C", "B", "A"]);
    }

    fn raw(province: &str, value: f64) -> RawObservation {
        RawObservation {
            province: province.to_string(),
            value,
            year: "2021".to_string(),
        }
    }

    #[test]
    fn test_non_finite_values_do_not_break_ranking() {
        let rows: Vec<RawObservation> = (0..40)
            .map(|i| {
                let value = if i % 7 == 0 { f64::NAN } else { i as f64 };
                raw(&format!("P{}", i), value)
            })
            .collect();
        let ranked = rank_observations(&rows, "2");
        assert_eq!(ranked.len(), 40);
        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, (1..=40).collect::<Vec<_>>());
        let finite: Vec<f64> = ranked
            .iter()
            .map(|r| r.value)
            .filter(|v| v.is_finite())
            .collect();
        for pair in finite.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_infinite_values_rank_at_the_ends() {
        let rows = vec![
            raw("Aceh", 3.0),
            raw("Riau", f64::INFINITY),
            raw("Bali", f64::NEG_INFINITY),
            raw("Papua", 7.0),
        ];
        let ranked = rank_observations(&rows, "1");
        let order: Vec<&str> = ranked.iter().map(|r| r.province.as_str()).collect();
        assert_eq!(order, vec!["Riau", "Papua", "Aceh", "Bali"]);
    }

    #[test]
    fn test_csv_with_non_finite_cells_ranks_only_numbers() {
        let raw = parse_observations_csv(
            "province,value,year\nAceh,NaN,2021\nBali,5,2021\nRiau,inf,2021\nJambi,9,2021\n",
        )
        .unwrap();
        let ranked = rank_observations(&raw, "3");
        let order: Vec<(&str, usize)> = ranked.iter().map(|r| (r.province.as_str(), r.rank)).collect();
        assert_eq!(order, vec![("Jambi", 1), ("Bali", 2)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_observations(&[], "1").is_empty());
    }
}

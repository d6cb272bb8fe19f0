//! 検索・ランキング
//!
//! クエリを小文字の空白区切りトークンに分割し、各プレートの
//! 「名前 + 説明」テキストに対して加点する。
//!
//! - テキスト全体にトークンが部分一致: +2
//! - いずれかの単語にトークンが部分一致: +1
//!
//! 2つの加点は独立して合算する。スコア0のプレートは除外し、
//! 同点はカタログ順を保つ（安定ソート）。

use crate::error::{Error, Result};
use crate::types::{Plate, ScoredPlate};

/// 全文一致の加点
pub const SUBSTRING_POINTS: u32 = 2;
/// 単語一致の加点
pub const WORD_POINTS: u32 = 1;

const USAGE: &str = "sp <keywords>  (e.g. sp trap red)";

/// クエリをトークンに分割
///
/// 空白のみのクエリは `Error::Usage`（「該当なし」とは区別する）。
pub fn tokenize(query: &str) -> Result<Vec<String>> {
    let tokens: Vec<String> = query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    if tokens.is_empty() {
        return Err(Error::Usage(USAGE.to_string()));
    }
    Ok(tokens)
}

/// 1プレートのスコア
pub fn score(tokens: &[String], plate: &Plate) -> u32 {
    let text = plate.search_text();
    let words: Vec<&str> = text.split_whitespace().collect();

    let mut total = 0;
    for token in tokens {
        if text.contains(token.as_str()) {
            total += SUBSTRING_POINTS;
        }
        if words.iter().any(|w| w.contains(token.as_str())) {
            total += WORD_POINTS;
        }
    }
    total
}

/// スコア降順に並べたヒット一覧（スコア0は除外）
pub fn rank<'a>(tokens: &[String], catalog: &'a [Plate]) -> Vec<ScoredPlate<'a>> {
    let mut scored: Vec<ScoredPlate<'a>> = catalog
        .iter()
        .enumerate()
        .filter_map(|(position, plate)| {
            let score = score(tokens, plate);
            (score > 0).then_some(ScoredPlate { plate, position, score })
        })
        .collect();

    // sort_by は安定ソートなので同点はカタログ順のまま
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// クエリで検索し、順位順のプレートを返す
///
/// 結果が空でもエラーにはしない（呼び出し側が NoMatch として扱う）。
pub fn search(query: &str, catalog: &[Plate]) -> Result<Vec<Plate>> {
    let tokens = tokenize(query)?;
    Ok(rank(&tokens, catalog)
        .into_iter()
        .map(|hit| hit.plate.clone())
        .collect())
}

/// ヒット位置のみ返す（ページングで使う）
pub fn search_positions(query: &str, catalog: &[Plate]) -> Result<Vec<usize>> {
    let tokens = tokenize(query)?;
    Ok(rank(&tokens, catalog).into_iter().map(|hit| hit.position).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_catalog() -> Vec<Plate> {
        vec![
            Plate::new("Trap Red", "deals damage"),
            Plate::new("Bleed Yellow", "causes bleed"),
            Plate::new("Trap Blue", "freezes"),
        ]
    }

    fn names(plates: &[Plate]) -> Vec<&str> {
        plates.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        let tokens = tokenize("  Trap   RED\t").unwrap();
        assert_eq!(tokens, vec!["trap", "red"]);
    }

    #[test]
    fn test_tokenize_empty_is_usage_error() {
        assert!(matches!(tokenize(""), Err(Error::Usage(_))));
        assert!(matches!(tokenize("   \n"), Err(Error::Usage(_))));
    }

    #[test]
    fn test_whole_word_scores_three() {
        let tokens = tokenize("trap").unwrap();
        assert_eq!(score(&tokens, &Plate::new("Trap Red", "deals damage")), 3);
    }

    #[test]
    fn test_partial_word_scores_three() {
        // トークンは空白を含まないので部分一致でも両方加点される
        let tokens = tokenize("dam").unwrap();
        assert_eq!(score(&tokens, &Plate::new("Trap Red", "deals damage")), 3);
    }

    #[test]
    fn test_score_sums_over_tokens() {
        let tokens = tokenize("trap red blue").unwrap();
        assert_eq!(score(&tokens, &Plate::new("Trap Red", "deals damage")), 6);
    }

    #[test]
    fn test_no_hit_scores_zero() {
        let tokens = tokenize("multiply").unwrap();
        assert_eq!(score(&tokens, &Plate::new("Trap Red", "deals damage")), 0);
    }

    #[test]
    fn test_search_trap_example() {
        let results = search("trap", &sample_catalog()).unwrap();
        assert_eq!(names(&results), vec!["Trap Red", "Trap Blue"]);
    }

    #[test]
    fn test_search_orders_by_score() {
        let results = search("trap blue", &sample_catalog()).unwrap();
        assert_eq!(names(&results), vec!["Trap Blue", "Trap Red"]);
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let results = search("botch", &sample_catalog()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_search_empty_query_is_usage_error() {
        assert!(matches!(search(" ", &sample_catalog()), Err(Error::Usage(_))));
    }

    #[test]
    fn test_search_positions_follow_rank() {
        let positions = search_positions("bleed trap blue", &sample_catalog()).unwrap();
        assert_eq!(positions, vec![2, 0, 1]);
    }

    fn plate_strategy() -> impl Strategy<Value = Plate> {
        ("[a-e]{1,4}( [a-e]{1,4}){0,2}", "[a-e]{1,4}( [a-e]{1,4}){0,3}")
            .prop_map(|(name, desc)| Plate::new(name, desc))
    }

    proptest! {
        #[test]
        fn prop_every_result_contains_a_token(
            catalog in prop::collection::vec(plate_strategy(), 0..20),
            query in "[a-e]{1,3}( [a-e]{1,3}){0,2}",
        ) {
            let tokens = tokenize(&query).unwrap();
            for plate in search(&query, &catalog).unwrap() {
                let text = plate.search_text();
                prop_assert!(tokens.iter().any(|t| text.contains(t.as_str())));
            }
        }

        #[test]
        fn prop_search_is_deterministic(
            catalog in prop::collection::vec(plate_strategy(), 0..20),
            query in "[a-e]{1,3}( [a-e]{1,3}){0,2}",
        ) {
            prop_assert_eq!(search(&query, &catalog).unwrap(), search(&query, &catalog).unwrap());
        }

        #[test]
        fn prop_ties_keep_catalog_order(
            catalog in prop::collection::vec(plate_strategy(), 0..20),
            query in "[a-e]{1,3}( [a-e]{1,3}){0,2}",
        ) {
            let tokens = tokenize(&query).unwrap();
            let hits = rank(&tokens, &catalog);
            for pair in hits.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    prop_assert!(pair[0].position < pair[1].position);
                }
            }
        }
    }
}

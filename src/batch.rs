use futures::stream::{FuturesUnordered, StreamExt};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::error::{EvalError, Result};
use crate::profile::{load_profile_async, StartupProfile};
use crate::scoring::{evaluate_detailed, validate_scoring, Evaluation, ScoringConfig};

/// A profile read from disk.
#[derive(Debug, Clone)]
pub struct LoadedProfile {
    pub path: PathBuf,
    pub profile: StartupProfile,
}

/// A file that could not be loaded or evaluated.
#[derive(Debug)]
pub struct Rejected {
    pub path: PathBuf,
    pub error: EvalError,
}

#[derive(Debug)]
pub struct LoadReport {
    pub loaded: Vec<LoadedProfile>,
    pub failed: Vec<Rejected>,
}

#[derive(Debug, Clone)]
pub struct Ranked {
    pub path: PathBuf,
    pub profile: StartupProfile,
    pub evaluation: Evaluation,
}

impl Ranked {
    pub fn overall_score(&self) -> u8 {
        self.evaluation.result.overall_score
    }
}

/// Evaluated profiles sorted best first, plus the ones that were rejected.
#[derive(Debug)]
pub struct Ranking {
    pub ranked: Vec<Ranked>,
    pub rejected: Vec<Rejected>,
}

/// Expand glob patterns into file paths, in pattern order.
///
/// A pattern that matches nothing is kept as a literal path so that the
/// missing file is reported when loading rather than silently dropped.
pub fn expand_patterns(patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let before = paths.len();
        let entries = glob::glob(pattern)
            .map_err(|e| anyhow::anyhow!("Invalid pattern '{}': {}", pattern, e))?;
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => paths.push(path),
                Ok(_) => {}
                Err(e) => warn!("Skipping unreadable path: {}", e),
            }
        }
        if paths.len() == before {
            paths.push(PathBuf::from(pattern));
        }
    }
    Ok(paths)
}

/// Drop paths that resolve to the same file (the same profile may be matched
/// by several patterns).
fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|path| {
            let key = std::fs::canonicalize(path).unwrap_or_else(|_| path.clone());
            seen.insert(key)
        })
        .collect()
}

/// Load profiles concurrently. Files that fail are reported and skipped; it is
/// an error only when every file fails.
pub async fn load_profiles(paths: Vec<PathBuf>) -> anyhow::Result<LoadReport> {
    let unique = dedup_paths(paths);
    debug!("Loading {} profile files", unique.len());

    let mut futures = FuturesUnordered::new();
    for path in unique {
        futures.push(async move {
            let result = load_profile_async(&path).await;
            (path, result)
        });
    }

    let mut loaded = Vec::new();
    let mut failed = Vec::new();
    while let Some((path, result)) = futures.next().await {
        match result {
            Ok(profile) => loaded.push(LoadedProfile { path, profile }),
            Err(error) => {
                warn!("Failed to load {}: {}", path.display(), error);
                failed.push(Rejected { path, error });
            }
        }
    }

    if loaded.is_empty() && !failed.is_empty() {
        return Err(EvalError::NoProfilesLoaded {
            failed: failed.len(),
            all_invalid: failed.iter().all(|r| r.error.is_invalid_input()),
        }
        .into());
    }

    failed.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(LoadReport { loaded, failed })
}

/// Best first: overall score descending, then older companies first, then by
/// name and path so the order is stable.
fn compare_ranked(a: &Ranked, b: &Ranked) -> Ordering {
    b.overall_score()
        .cmp(&a.overall_score())
        .then_with(|| a.profile.founding_date.cmp(&b.profile.founding_date))
        .then_with(|| a.profile.company_name.cmp(&b.profile.company_name))
        .then_with(|| a.path.cmp(&b.path))
}

/// Evaluate every profile and sort the results. Profiles that fail
/// validation are collected as rejected.
pub fn rank(profiles: Vec<LoadedProfile>, config: &ScoringConfig) -> Result<Ranking> {
    validate_scoring(config).map_err(EvalError::InvalidConfig)?;

    let mut ranked = Vec::new();
    let mut rejected = Vec::new();
    for LoadedProfile { path, profile } in profiles {
        match evaluate_detailed(&profile, config) {
            Ok(evaluation) => ranked.push(Ranked {
                path,
                profile,
                evaluation,
            }),
            Err(error) => {
                warn!("Rejected {}: {}", path.display(), error);
                rejected.push(Rejected { path, error });
            }
        }
    }

    ranked.sort_by(compare_ranked);
    rejected.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(Ranking { ranked, rejected })
}

/// Expand patterns, load every profile and rank them. Load failures are
/// folded into the rejected list.
pub async fn load_and_rank(patterns: &[String], config: &ScoringConfig) -> anyhow::Result<Ranking> {
    let paths = expand_patterns(patterns)?;
    let report = load_profiles(paths).await?;
    let mut ranking = rank(report.loaded, config)?;
    ranking.rejected.extend(report.failed);
    ranking.rejected.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(ranking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Industry;
    use chrono::NaiveDate;
    use std::fs;

    fn profile(name: &str, market_size: f64, founded: (i32, u32, u32)) -> StartupProfile {
        StartupProfile {
            company_name: name.to_string(),
            industry: Industry::Other,
            founding_date: NaiveDate::from_ymd_opt(founded.0, founded.1, founded.2).unwrap(),
            business_model: String::new(),
            funding_needed: 100_000.0,
            equity_offered: 10.0,
            team_size: 3,
            team_experience: String::new(),
            current_revenue: 50_000.0,
            traction_metrics: String::new(),
            market_size,
            competition_analysis: String::new(),
        }
    }

    fn loaded(name: &str, market_size: f64, founded: (i32, u32, u32)) -> LoadedProfile {
        LoadedProfile {
            path: PathBuf::from(format!("{}.yaml", name.to_lowercase())),
            profile: profile(name, market_size, founded),
        }
    }

    fn names(ranking: &Ranking) -> Vec<&str> {
        ranking
            .ranked
            .iter()
            .map(|r| r.profile.company_name.as_str())
            .collect()
    }

    #[test]
    fn test_rank_by_score_descending() {
        let ranking = rank(
            vec![
                loaded("Small", 1_000_000.0, (2020, 1, 1)),
                loaded("Huge", 5e9, (2020, 1, 1)),
                loaded("Mid", 2e8, (2020, 1, 1)),
            ],
            &ScoringConfig::default(),
        )
        .unwrap();
        assert_eq!(names(&ranking), vec!["Huge", "Mid", "Small"]);
        assert!(ranking.rejected.is_empty());
    }

    #[test]
    fn test_rank_ties_prefer_older_company() {
        let ranking = rank(
            vec![
                loaded("Newer", 5e9, (2022, 6, 1)),
                loaded("Older", 5e9, (2018, 3, 1)),
            ],
            &ScoringConfig::default(),
        )
        .unwrap();
        assert_eq!(names(&ranking), vec!["Older", "Newer"]);
    }

    #[test]
    fn test_rank_ties_on_date_use_name() {
        let ranking = rank(
            vec![
                loaded("Beta", 5e9, (2020, 1, 1)),
                loaded("Alpha", 5e9, (2020, 1, 1)),
            ],
            &ScoringConfig::default(),
        )
        .unwrap();
        assert_eq!(names(&ranking), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_rank_collects_invalid_profiles() {
        let mut bad = loaded("Bad", 5e9, (2020, 1, 1));
        bad.profile.team_size = 0;
        let ranking = rank(
            vec![bad, loaded("Good", 5e9, (2020, 1, 1))],
            &ScoringConfig::default(),
        )
        .unwrap();
        assert_eq!(names(&ranking), vec!["Good"]);
        assert_eq!(ranking.rejected.len(), 1);
        assert!(ranking.rejected[0].error.is_invalid_input());
    }

    #[test]
    fn test_rank_rejects_invalid_config() {
        let config = ScoringConfig {
            insight_threshold: Some(500.0),
            ..ScoringConfig::default()
        };
        let result = rank(vec![loaded("Any", 1.0, (2020, 1, 1))], &config);
        assert!(matches!(result, Err(EvalError::InvalidConfig(_))));
    }

    fn write_profile(dir: &std::path::Path, file: &str, name: &str, market_size: u64) -> PathBuf {
        let path = dir.join(file);
        let yaml = format!(
            r#"company_name: {name}
industry: Technology
founding_date: "2021-01-01"
business_model: SaaS
funding_needed: 100000
equity_offered: 10
team_size: 3
team_experience: ""
current_revenue: 50000
traction_metrics: ""
market_size: {market_size}
competition_analysis: ""
"#
        );
        fs::write(&path, yaml).unwrap();
        path
    }

    #[test]
    fn test_expand_patterns_keeps_unmatched_literal() {
        let dir = tempfile::tempdir().unwrap();
        write_profile(dir.path(), "a.yaml", "A", 1);
        write_profile(dir.path(), "b.yaml", "B", 1);

        let pattern = format!("{}/*.yaml", dir.path().display());
        let missing = format!("{}/missing.yaml", dir.path().display());
        let paths = expand_patterns(&[pattern, missing.clone()]).unwrap();
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[2], PathBuf::from(missing));
    }

    #[test]
    fn test_dedup_paths_same_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_profile(dir.path(), "a.yaml", "A", 1);
        let alias = dir.path().join(".").join("a.yaml");
        assert_eq!(dedup_paths(vec![path, alias]).len(), 1);
    }

    #[tokio::test]
    async fn test_load_profiles_partial_failure() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_profile(dir.path(), "good.yaml", "Good", 1);
        let bad = dir.path().join("bad.yaml");
        fs::write(&bad, "company_name: [").unwrap();

        let report = load_profiles(vec![good, bad.clone()]).await.unwrap();
        assert_eq!(report.loaded.len(), 1);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].path, bad);
    }

    #[tokio::test]
    async fn test_load_profiles_all_failed_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_profiles(vec![dir.path().join("none.yaml")])
            .await
            .unwrap_err();
        let eval_err = err.downcast_ref::<EvalError>().unwrap();
        // A missing file is an I/O failure, not bad input
        assert!(matches!(
            eval_err,
            EvalError::NoProfilesLoaded {
                failed: 1,
                all_invalid: false
            }
        ));
        assert!(!eval_err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_load_profiles_all_unparseable_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let bad_yaml = dir.path().join("bad.yaml");
        fs::write(&bad_yaml, "company_name: [").unwrap();
        let bad_json = dir.path().join("bad.json");
        fs::write(&bad_json, "{").unwrap();

        let err = load_profiles(vec![bad_yaml, bad_json]).await.unwrap_err();
        let eval_err = err.downcast_ref::<EvalError>().unwrap();
        assert!(matches!(
            eval_err,
            EvalError::NoProfilesLoaded {
                failed: 2,
                all_invalid: true
            }
        ));
        assert!(eval_err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_load_and_rank() {
        let dir = tempfile::tempdir().unwrap();
        write_profile(dir.path(), "small.yaml", "Small", 5_000_000);
        write_profile(dir.path(), "big.yaml", "Big", 5_000_000_000);
        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{").unwrap();

        let patterns = vec![
            format!("{}/*.yaml", dir.path().display()),
            broken.display().to_string(),
        ];
        let ranking = load_and_rank(&patterns, &ScoringConfig::default())
            .await
            .unwrap();
        assert_eq!(names(&ranking), vec!["Big", "Small"]);
        assert_eq!(ranking.rejected.len(), 1);
        assert_eq!(ranking.rejected[0].path, broken);
    }
}

//! Static model catalog: per-provider tier table and task-to-model mapping.
//!
//! Process-wide static configuration, never mutated at runtime. The
//! adapters' default models are a separate set of constants; the catalog is
//! consulted only by callers that explicitly request a tier.

use mnemo_types::dispatch::ProviderId;

/// The three quality/cost tiers a provider offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierTable {
    pub cheap: &'static str,
    pub mid: &'static str,
    pub best: &'static str,
}

/// The tiered model table for a provider.
pub const fn tiers(provider: ProviderId) -> TierTable {
    match provider {
        ProviderId::Anthropic => TierTable {
            cheap: "claude-3-5-haiku-20241022",
            mid: "claude-3-5-sonnet-20241022",
            best: "claude-3-opus-20240229",
        },
        ProviderId::OpenAi => TierTable {
            cheap: "gpt-4o-mini",
            mid: "gpt-4o",
            best: "o1-preview",
        },
        ProviderId::Google => TierTable {
            cheap: "gemini-1.5-flash-8b",
            mid: "gemini-1.5-flash",
            best: "gemini-1.5-pro",
        },
    }
}

/// Model for a logical task tier.
///
/// Labeling runs on the cheap tier; profiling and detective work run on the
/// best tier. Unrecognized tasks fall back to the cheap tier.
pub fn model_for_task(task: &str, provider: ProviderId) -> &'static str {
    let table = tiers(provider);
    match task {
        "labeler" => table.cheap,
        "profiler" | "detective" => table.best,
        _ => table.cheap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeler_maps_to_cheap_tier() {
        assert_eq!(
            model_for_task("labeler", ProviderId::Anthropic),
            tiers(ProviderId::Anthropic).cheap
        );
    }

    #[test]
    fn test_profiler_and_detective_map_to_best_tier() {
        assert_eq!(
            model_for_task("profiler", ProviderId::OpenAi),
            tiers(ProviderId::OpenAi).best
        );
        assert_eq!(
            model_for_task("detective", ProviderId::Google),
            tiers(ProviderId::Google).best
        );
    }

    #[test]
    fn test_unknown_task_falls_back_to_cheap_tier() {
        assert_eq!(
            model_for_task("summarizer", ProviderId::Google),
            tiers(ProviderId::Google).cheap
        );
        assert_eq!(
            model_for_task("", ProviderId::Anthropic),
            tiers(ProviderId::Anthropic).cheap
        );
    }

    #[test]
    fn test_every_provider_has_three_distinct_tiers() {
        for provider in [ProviderId::Anthropic, ProviderId::OpenAi, ProviderId::Google] {
            let table = tiers(provider);
            assert_ne!(table.cheap, table.best);
            assert!(!table.cheap.is_empty());
            assert!(!table.mid.is_empty());
            assert!(!table.best.is_empty());
        }
    }
}

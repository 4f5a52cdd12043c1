// ============================================================================
// Provider Resolver
// Selects the amount implementation that satisfies a required context
// ============================================================================

use crate::domain::{AmountFlavor, AmountType, InclusionPolicy, NumericContext, ProviderDescriptor};
use crate::numeric::{MonetaryError, MonetaryResult};
use smallvec::SmallVec;
use std::cmp::Reverse;

type Candidates<'a> = SmallVec<[&'a ProviderDescriptor; 4]>;

/// Whether a provider bounded by `maximal` can represent `required`.
///
/// An unbounded maximal precision (0) accepts everything. Otherwise an
/// unbounded requirement is rejected, as is any requirement with more
/// precision or a larger scale than the maximum.
pub fn is_precision_compatible(required: &NumericContext, maximal: &NumericContext) -> bool {
    if maximal.precision() == 0 {
        return true;
    }
    if required.precision() == 0 {
        return false;
    }
    if required.precision() > maximal.precision() {
        return false;
    }
    if required.max_scale() > maximal.max_scale() {
        return false;
    }
    true
}

/// Ordering key for tie-breaking between candidates; smaller sorts first.
///
/// Keys, most significant first:
/// 1. maximal flavor is `Precision`
/// 2. maximal precision is unbounded
/// 3. larger maximal scale
pub type RankKey = (Reverse<bool>, Reverse<bool>, Reverse<i32>);

/// Rank key of one provider
pub fn rank_key(descriptor: &ProviderDescriptor) -> RankKey {
    let maximal = descriptor.maximal_context();
    (
        Reverse(maximal.amount_flavor() == AmountFlavor::Precision),
        Reverse(maximal.precision() == 0),
        Reverse(maximal.max_scale()),
    )
}

/// Choose the amount type for `required` from `providers`.
///
/// - no required context: `default_type`
/// - an explicitly named type is authoritative; it either fits or fails
/// - otherwise providers of matching (or undefined) flavor, then any flavor,
///   then the exact flavor match, then the best [`rank_key`]
///
/// Registration order breaks remaining ties. The provider slice is only read.
///
/// # Errors
/// - `IncompatibleContext` if the named type cannot satisfy `required`
/// - `NoMatchingProvider` if no eligible provider is compatible
pub fn resolve_type(
    required: Option<&NumericContext>,
    providers: &[ProviderDescriptor],
    default_type: &AmountType,
) -> MonetaryResult<AmountType> {
    let Some(required) = required else {
        return Ok(default_type.clone());
    };

    if let Some(explicit) = find_explicit(required, providers)? {
        tracing::debug!(amount_type = %explicit, "resolved explicitly requested amount type");
        return Ok(explicit.clone());
    }

    let mut candidates: Candidates<'_> = providers
        .iter()
        .filter(|p| is_open_query_eligible(p))
        .filter(|p| {
            let flavor = p.default_context().amount_flavor();
            flavor == AmountFlavor::Undefined || flavor == required.amount_flavor()
        })
        .filter(|p| is_precision_compatible(required, p.maximal_context()))
        .collect();

    if candidates.is_empty() {
        tracing::debug!(context = %required, "no flavor match, relaxing flavor");
        candidates = providers
            .iter()
            .filter(|p| is_open_query_eligible(p))
            .filter(|p| is_precision_compatible(required, p.maximal_context()))
            .collect();
    }

    let chosen = match candidates.as_slice() {
        [] => return Err(MonetaryError::NoMatchingProvider(required.to_string())),
        [single] => *single,
        several => several
            .iter()
            .copied()
            .find(|p| p.default_context().amount_flavor() == required.amount_flavor())
            .or_else(|| several.iter().copied().min_by_key(|p| rank_key(p)))
            .ok_or_else(|| MonetaryError::NoMatchingProvider(required.to_string()))?,
    };

    tracing::debug!(
        amount_type = %chosen.amount_type(),
        candidates = candidates.len(),
        "resolved amount type"
    );
    Ok(chosen.amount_type().clone())
}

fn is_open_query_eligible(descriptor: &ProviderDescriptor) -> bool {
    descriptor.inclusion_policy() == InclusionPolicy::Always
}

fn find_explicit<'a>(
    required: &NumericContext,
    providers: &'a [ProviderDescriptor],
) -> MonetaryResult<Option<&'a AmountType>> {
    let Some(requested) = required.amount_type() else {
        return Ok(None);
    };

    let named = providers
        .iter()
        .filter(|p| p.inclusion_policy() != InclusionPolicy::Never)
        .find(|p| p.amount_type() == requested);

    match named {
        None => Ok(None),
        Some(p) if is_precision_compatible(required, p.maximal_context()) => {
            Ok(Some(p.amount_type()))
        }
        Some(p) => Err(MonetaryError::IncompatibleContext {
            amount_type: requested.to_string(),
            required: required.to_string(),
            maximal: p.maximal_context().to_string(),
        }),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(precision: u32, max_scale: i32, flavor: AmountFlavor) -> NumericContext {
        NumericContext::builder()
            .with_precision(precision)
            .with_max_scale(max_scale)
            .with_flavor(flavor)
            .build()
    }

    fn provider(name: &'static str, default: NumericContext, maximal: NumericContext) -> ProviderDescriptor {
        ProviderDescriptor::new(AmountType::from_static(name), default, maximal)
    }

    fn undefined(name: &'static str, precision: u32, max_scale: i32) -> ProviderDescriptor {
        let c = ctx(precision, max_scale, AmountFlavor::Undefined);
        provider(name, c.clone(), c)
    }

    const DEFAULT: AmountType = AmountType::from_static("Default");

    #[test]
    fn test_compatibility_rules() {
        let unbounded = ctx(0, 0, AmountFlavor::Undefined);
        assert!(is_precision_compatible(&ctx(500, 400, AmountFlavor::Undefined), &unbounded));

        let bounded = ctx(19, 5, AmountFlavor::Undefined);
        assert!(!is_precision_compatible(&ctx(0, 2, AmountFlavor::Undefined), &bounded));
        assert!(!is_precision_compatible(&ctx(20, 2, AmountFlavor::Undefined), &bounded));
        assert!(!is_precision_compatible(&ctx(10, 6, AmountFlavor::Undefined), &bounded));
        assert!(is_precision_compatible(&ctx(19, 5, AmountFlavor::Undefined), &bounded));
    }

    #[test]
    fn test_absent_context_returns_default() {
        let providers = ProviderDescriptor::builtin();
        assert_eq!(resolve_type(None, &providers, &DEFAULT).unwrap(), DEFAULT);
    }

    #[test]
    fn test_explicit_type_is_authoritative() {
        let providers = vec![undefined("Small", 10, 2), undefined("Big", 0, 100)];
        let required = ctx(12, 2, AmountFlavor::Undefined)
            .to_builder()
            .with_amount_type(AmountType::from_static("Small"))
            .build();

        let err = resolve_type(Some(&required), &providers, &DEFAULT).unwrap_err();
        assert!(matches!(err, MonetaryError::IncompatibleContext { ref amount_type, .. } if amount_type == "Small"));

        let fitting = required.to_builder().with_precision(8).build();
        assert_eq!(
            resolve_type(Some(&fitting), &providers, &DEFAULT).unwrap(),
            AmountType::from_static("Small")
        );
    }

    #[test]
    fn test_explicit_never_provider_ignored() {
        let providers = vec![
            undefined("Hidden", 0, 10).with_inclusion_policy(InclusionPolicy::Never),
            undefined("Open", 0, 10),
        ];
        let required = ctx(5, 2, AmountFlavor::Undefined)
            .to_builder()
            .with_amount_type(AmountType::from_static("Hidden"))
            .build();
        assert_eq!(
            resolve_type(Some(&required), &providers, &DEFAULT).unwrap(),
            AmountType::from_static("Open")
        );
    }

    #[test]
    fn test_explicit_direct_reference_only_allowed() {
        let providers = ProviderDescriptor::builtin();
        let required = NumericContext::builder()
            .with_precision(10)
            .with_amount_type(AmountType::ROUNDED_MONEY)
            .build();
        assert_eq!(
            resolve_type(Some(&required), &providers, &DEFAULT).unwrap(),
            AmountType::ROUNDED_MONEY
        );
    }

    #[test]
    fn test_direct_reference_only_skipped_in_open_query() {
        let providers = vec![
            undefined("Direct", 0, 10).with_inclusion_policy(InclusionPolicy::DirectReferenceOnly),
            undefined("Bounded", 19, 5),
        ];
        let required = ctx(10, 2, AmountFlavor::Undefined);
        assert_eq!(
            resolve_type(Some(&required), &providers, &DEFAULT).unwrap(),
            AmountType::from_static("Bounded")
        );
    }

    #[test]
    fn test_larger_scale_wins_among_undefined() {
        let providers = vec![undefined("Scale4", 30, 4), undefined("Scale8", 30, 8)];
        let required = ctx(10, 2, AmountFlavor::Precision);
        assert_eq!(
            resolve_type(Some(&required), &providers, &DEFAULT).unwrap(),
            AmountType::from_static("Scale8")
        );
    }

    #[test]
    fn test_exact_flavor_match_first_registered() {
        let providers = vec![
            undefined("Generic", 0, 10),
            provider("PerfA", ctx(19, 5, AmountFlavor::Performance), ctx(19, 5, AmountFlavor::Performance)),
            provider("PerfB", ctx(19, 5, AmountFlavor::Performance), ctx(19, 5, AmountFlavor::Performance)),
        ];
        let required = ctx(10, 2, AmountFlavor::Performance);
        assert_eq!(
            resolve_type(Some(&required), &providers, &DEFAULT).unwrap(),
            AmountType::from_static("PerfA")
        );
    }

    #[test]
    fn test_builtin_resolution_by_flavor() {
        let providers = ProviderDescriptor::builtin();

        let performance = ctx(10, 2, AmountFlavor::Performance);
        assert_eq!(
            resolve_type(Some(&performance), &providers, &DEFAULT).unwrap(),
            AmountType::FAST_MONEY
        );

        let precision = ctx(10, 2, AmountFlavor::Precision);
        assert_eq!(
            resolve_type(Some(&precision), &providers, &DEFAULT).unwrap(),
            AmountType::MONEY
        );

        // FastMoney cannot hold 30 digits, so the flavor is relaxed
        let wide = ctx(30, 2, AmountFlavor::Performance);
        assert_eq!(
            resolve_type(Some(&wide), &providers, &DEFAULT).unwrap(),
            AmountType::MONEY
        );
    }

    #[test]
    fn test_ranking_keys_in_order() {
        let precise = provider("Precise", ctx(10, 2, AmountFlavor::Undefined), ctx(50, 2, AmountFlavor::Precision));
        let unbounded = provider("Unbounded", ctx(10, 2, AmountFlavor::Undefined), ctx(0, 1, AmountFlavor::Undefined));
        let wide = undefined("Wide", 50, 20);
        let narrow = undefined("Narrow", 50, 3);

        assert!(rank_key(&precise) < rank_key(&unbounded));
        assert!(rank_key(&unbounded) < rank_key(&wide));
        assert!(rank_key(&wide) < rank_key(&narrow));

        let providers = vec![narrow, wide, unbounded, precise];
        let required = ctx(10, 2, AmountFlavor::Performance);
        assert_eq!(
            resolve_type(Some(&required), &providers, &DEFAULT).unwrap(),
            AmountType::from_static("Precise")
        );
    }

    #[test]
    fn test_full_tie_keeps_registration_order() {
        let providers = vec![undefined("First", 30, 4), undefined("Second", 30, 4)];
        let required = ctx(10, 2, AmountFlavor::Precision);
        assert_eq!(
            resolve_type(Some(&required), &providers, &DEFAULT).unwrap(),
            AmountType::from_static("First")
        );
    }

    #[test]
    fn test_no_compatible_provider() {
        let providers = vec![undefined("Tiny", 5, 1)];
        let required = ctx(10, 2, AmountFlavor::Undefined);
        assert!(matches!(
            resolve_type(Some(&required), &providers, &DEFAULT),
            Err(MonetaryError::NoMatchingProvider(_))
        ));
    }

    #[test]
    fn test_resolution_is_stable() {
        let providers = ProviderDescriptor::builtin();
        let required = ctx(10, 2, AmountFlavor::Undefined);
        let first = resolve_type(Some(&required), &providers, &DEFAULT).unwrap();
        for _ in 0..10 {
            assert_eq!(resolve_type(Some(&required), &providers, &DEFAULT).unwrap(), first);
        }
        assert_eq!(providers, ProviderDescriptor::builtin());
    }
}

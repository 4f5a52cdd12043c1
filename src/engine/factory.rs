// ============================================================================
// Amount Factory
// Creates amounts with provider resolution and canonical normalization
// ============================================================================

use super::registry::ProviderRegistry;
use super::resolver::resolve_type;
use super::rounding::DefaultRounding;
use crate::domain::{
    AmountType, AmountsConfig, CurrencyUnit, Money, NumericContext, ProviderDescriptor,
    StaticCurrencyCatalog,
};
use crate::interfaces::{CurrencyCatalog, ProviderSource};
use crate::numeric::{
    normalize_with_context, CanonicalDecimal, MonetaryError, MonetaryResult, NumberLike,
    RoundingMode,
};
use std::sync::Arc;

// ============================================================================
// Factory
// ============================================================================

/// Entry point for creating amounts.
///
/// # Example
/// ```
/// use monetary_amount::prelude::*;
///
/// let factory = AmountFactoryBuilder::new().build().unwrap();
/// let amount = factory.create("CHF", 12.50, None).unwrap();
/// assert_eq!(amount.to_string(), "CHF 12.5");
/// assert_eq!(amount.amount_type(), Some(&AmountType::MONEY));
/// ```
pub struct AmountFactory {
    config: AmountsConfig,
    providers: Arc<dyn ProviderSource>,
    currencies: Arc<dyn CurrencyCatalog>,
}

impl AmountFactory {
    pub fn config(&self) -> &AmountsConfig {
        &self.config
    }

    /// Amount type that would be used for `required`.
    pub fn resolve_amount_type(
        &self,
        required: Option<&NumericContext>,
    ) -> MonetaryResult<AmountType> {
        let snapshot = self.providers.providers();
        resolve_type(required, &snapshot, &self.config.default_amount_type)
    }

    /// Resolve, normalize and assemble an amount.
    ///
    /// The amount's context is the caller's context tagged with the resolved
    /// type, or the provider's default context when the caller gives none.
    /// The normalized number must fit the provider's maximal context.
    ///
    /// # Errors
    /// `UnknownCurrency`, `IncompatibleContext`, `NoMatchingProvider`,
    /// `InvalidNumber`.
    pub fn create(
        &self,
        currency_code: &str,
        number: impl Into<NumberLike>,
        context: Option<&NumericContext>,
    ) -> MonetaryResult<Money> {
        let currency = self.currencies.require(currency_code)?;
        self.create_with_currency(currency, number.into(), context)
    }

    /// Start a step-by-step amount request
    pub fn request(&self) -> AmountRequest<'_> {
        AmountRequest {
            factory: self,
            currency: None,
            number: None,
            context: None,
        }
    }

    /// Rounding to the currency's default fraction digits.
    ///
    /// `mode` defaults to the configured rounding mode.
    pub fn rounding(
        &self,
        currency_code: &str,
        mode: Option<RoundingMode>,
    ) -> MonetaryResult<DefaultRounding> {
        let currency = self.currencies.require(currency_code)?;
        let mode = mode.unwrap_or(self.config.default_rounding_mode);
        Ok(DefaultRounding::for_currency_with_mode(&currency, mode))
    }

    fn create_with_currency(
        &self,
        currency: CurrencyUnit,
        number: NumberLike,
        context: Option<&NumericContext>,
    ) -> MonetaryResult<Money> {
        let snapshot = self.providers.providers();
        let amount_type = resolve_type(context, &snapshot, &self.config.default_amount_type)?;
        let provider = find_provider(&snapshot, &amount_type)?;

        let effective = match context {
            Some(context) => context.to_builder().with_amount_type(amount_type.clone()).build(),
            None => provider.default_context().clone(),
        };

        let number = normalize_with_context(number, &effective)?;
        check_capacity(&number, provider)?;
        tracing::debug!(
            currency = currency.code(),
            amount_type = %amount_type,
            number = %number,
            "created amount"
        );
        Ok(Money::from_canonical(currency, number, effective))
    }
}

/// Reject numbers beyond the provider's maximal precision or scale.
fn check_capacity(
    number: &CanonicalDecimal,
    provider: &ProviderDescriptor,
) -> MonetaryResult<()> {
    let maximal = provider.maximal_context();
    let fits_precision =
        maximal.is_unbounded() || number.precision() <= u64::from(maximal.precision());
    let fits_scale = number.scale() <= i64::from(maximal.max_scale());
    if fits_precision && fits_scale {
        return Ok(());
    }

    Err(MonetaryError::IncompatibleContext {
        amount_type: provider.amount_type().to_string(),
        required: format!(
            "number {} (precision={}, scale={})",
            number,
            number.precision(),
            number.scale()
        ),
        maximal: maximal.to_string(),
    })
}

fn find_provider<'a>(
    providers: &'a [ProviderDescriptor],
    amount_type: &AmountType,
) -> MonetaryResult<&'a ProviderDescriptor> {
    providers
        .iter()
        .find(|p| p.amount_type() == amount_type)
        .ok_or_else(|| MonetaryError::NoMatchingProvider(amount_type.to_string()))
}

// ============================================================================
// Step-by-step Request
// ============================================================================

/// Amount request filled in piece by piece, then created.
pub struct AmountRequest<'a> {
    factory: &'a AmountFactory,
    currency: Option<CurrencyUnit>,
    number: Option<NumberLike>,
    context: Option<NumericContext>,
}

impl AmountRequest<'_> {
    /// Set the currency by code
    pub fn set_currency(mut self, code: &str) -> MonetaryResult<Self> {
        self.currency = Some(self.factory.currencies.require(code)?);
        Ok(self)
    }

    pub fn set_currency_unit(mut self, currency: CurrencyUnit) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn set_number(mut self, number: impl Into<NumberLike>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn set_context(mut self, context: NumericContext) -> Self {
        self.context = Some(context);
        self
    }

    /// # Errors
    /// `MissingArgument` if the currency or number was not set, plus anything
    /// [`AmountFactory::create`] reports.
    pub fn create(self) -> MonetaryResult<Money> {
        let currency = self.currency.ok_or(MonetaryError::MissingArgument("currency"))?;
        let number = self.number.ok_or(MonetaryError::MissingArgument("number"))?;
        self.factory
            .create_with_currency(currency, number, self.context.as_ref())
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for [`AmountFactory`]
///
/// Defaults: built-in providers, the static ISO currency catalog and
/// [`AmountsConfig::default`].
pub struct AmountFactoryBuilder {
    config: AmountsConfig,
    providers: Option<Arc<dyn ProviderSource>>,
    extra_providers: Vec<ProviderDescriptor>,
    currencies: Option<Arc<dyn CurrencyCatalog>>,
}

impl AmountFactoryBuilder {
    pub fn new() -> Self {
        Self {
            config: AmountsConfig::default(),
            providers: None,
            extra_providers: Vec::new(),
            currencies: None,
        }
    }

    pub fn with_config(mut self, config: AmountsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_default_amount_type(mut self, amount_type: AmountType) -> Self {
        self.config.default_amount_type = amount_type;
        self
    }

    pub fn with_default_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.config.default_rounding_mode = mode;
        self
    }

    /// Use an external provider source instead of the built-in registry
    pub fn with_provider_source(mut self, source: Arc<dyn ProviderSource>) -> Self {
        self.providers = Some(source);
        self
    }

    /// Register an extra provider after the built-in ones
    pub fn with_provider(mut self, descriptor: ProviderDescriptor) -> Self {
        self.extra_providers.push(descriptor);
        self
    }

    pub fn with_currency_catalog(mut self, catalog: Arc<dyn CurrencyCatalog>) -> Self {
        self.currencies = Some(catalog);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Validate and build the factory.
    ///
    /// # Errors
    /// `InvalidConfig` if the configuration is invalid, extra providers are
    /// combined with an external source, or the default amount type is not
    /// registered.
    pub fn build(self) -> MonetaryResult<AmountFactory> {
        self.config.validate()?;

        let providers: Arc<dyn ProviderSource> = match self.providers {
            Some(source) if self.extra_providers.is_empty() => source,
            Some(_) => {
                return Err(MonetaryError::InvalidConfig(
                    "Extra providers cannot be added to an external provider source".to_string(),
                ))
            }
            None => {
                let registry = ProviderRegistry::with_builtin_providers();
                for descriptor in self.extra_providers {
                    registry.register(descriptor)?;
                }
                Arc::new(registry)
            }
        };

        let snapshot = providers.providers();
        find_provider(&snapshot, &self.config.default_amount_type).map_err(|_| {
            MonetaryError::InvalidConfig(format!(
                "Default amount type {} is not registered",
                self.config.default_amount_type
            ))
        })?;

        let currencies = self
            .currencies
            .unwrap_or_else(|| Arc::new(StaticCurrencyCatalog::iso()));

        Ok(AmountFactory {
            config: self.config,
            providers,
            currencies,
        })
    }
}

impl Default for AmountFactoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AmountFlavor;
    use crate::numeric::MathContext;

    fn factory() -> AmountFactory {
        AmountFactoryBuilder::new().build().unwrap()
    }

    #[test]
    fn test_create_default_type() {
        let amount = factory().create("CHF", 12.50, None).unwrap();
        assert_eq!(amount.amount_type(), Some(&AmountType::MONEY));
        assert_eq!(amount.number().scale(), 1);
        assert_eq!(amount.context().precision(), 64);
    }

    #[test]
    fn test_create_performance_flavor() {
        let context = NumericContext::builder()
            .with_precision(10)
            .with_max_scale(2)
            .with_flavor(AmountFlavor::Performance)
            .build();
        let amount = factory().create("USD", 1.25, Some(&context)).unwrap();
        assert_eq!(amount.amount_type(), Some(&AmountType::FAST_MONEY));
        assert_eq!(amount.context().precision(), 10);
    }

    #[test]
    fn test_create_beyond_provider_capacity() {
        let context = NumericContext::builder()
            .with_precision(10)
            .with_max_scale(2)
            .with_flavor(AmountFlavor::Performance)
            .build();
        let factory = factory();

        let too_fine = factory.create("USD", 1.123456789, Some(&context));
        assert!(matches!(
            too_fine,
            Err(MonetaryError::IncompatibleContext { ref amount_type, .. })
                if amount_type == "FastMoney"
        ));

        let too_long = factory.create("USD", 12_345_678_901_234_567_890u128, Some(&context));
        assert!(matches!(too_long, Err(MonetaryError::IncompatibleContext { .. })));

        // Five fractional digits still fit
        let amount = factory.create("USD", 1.12345, Some(&context)).unwrap();
        assert_eq!(amount.amount_type(), Some(&AmountType::FAST_MONEY));
        assert_eq!(amount.number().scale(), 5);

        // Unbounded providers take anything
        let wide = factory.create("USD", 1.123456789, None).unwrap();
        assert_eq!(wide.number().scale(), 9);
    }

    #[test]
    fn test_create_applies_math_context() {
        let context = NumericContext::builder()
            .with_math_context(MathContext::new(5, RoundingMode::HalfEven))
            .build();
        let amount = factory().create("EUR", 1234.5678, Some(&context)).unwrap();
        assert_eq!(amount.number().to_string(), "1234.6");
    }

    #[test]
    fn test_incompatible_explicit_type() {
        let context = NumericContext::builder()
            .with_precision(30)
            .with_amount_type(AmountType::FAST_MONEY)
            .build();
        assert!(matches!(
            factory().create("USD", 1, Some(&context)),
            Err(MonetaryError::IncompatibleContext { .. })
        ));
    }

    #[test]
    fn test_unknown_currency() {
        assert_eq!(
            factory().create("ZZZ", 1, None),
            Err(MonetaryError::UnknownCurrency("ZZZ".to_string()))
        );
    }

    #[test]
    fn test_request_missing_arguments() {
        let factory = factory();
        assert_eq!(
            factory.request().set_number(1).create(),
            Err(MonetaryError::MissingArgument("currency"))
        );
        assert_eq!(
            factory.request().set_currency("CHF").unwrap().create(),
            Err(MonetaryError::MissingArgument("number"))
        );
    }

    #[test]
    fn test_request_complete() {
        let amount = factory()
            .request()
            .set_currency_unit(CurrencyUnit::new("BTC", 8))
            .set_number(rust_decimal::Decimal::new(150_000_000, 8))
            .create()
            .unwrap();
        assert_eq!(amount.to_string(), "BTC 1.5");
    }

    #[test]
    fn test_rounding_from_factory() {
        let factory = factory();
        let amount = factory.create("JPY", 1234.5, None).unwrap();
        let rounding = factory.rounding("JPY", None).unwrap();
        assert_eq!(rounding.mode(), RoundingMode::HalfUp);
        assert_eq!(amount.with(&rounding).to_string(), "JPY 1235");

        let floor = factory.rounding("JPY", Some(RoundingMode::Floor)).unwrap();
        assert_eq!(amount.with(&floor).to_string(), "JPY 1234");
    }

    #[test]
    fn test_builder_extra_provider() {
        let context = NumericContext::builder()
            .with_precision(38)
            .with_max_scale(18)
            .with_flavor(AmountFlavor::Performance)
            .build();
        let factory = AmountFactoryBuilder::new()
            .with_provider(ProviderDescriptor::new(
                AmountType::from_static("WideMoney"),
                context.clone(),
                context,
            ))
            .build()
            .unwrap();

        let required = NumericContext::builder()
            .with_precision(25)
            .with_max_scale(2)
            .with_flavor(AmountFlavor::Performance)
            .build();
        assert_eq!(
            factory.resolve_amount_type(Some(&required)).unwrap(),
            AmountType::from_static("WideMoney")
        );
    }

    #[test]
    fn test_builder_rejects_unregistered_default() {
        let result = AmountFactoryBuilder::new()
            .with_default_amount_type(AmountType::new("Missing"))
            .build();
        assert!(matches!(result, Err(MonetaryError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_external_source() {
        let registry = Arc::new(ProviderRegistry::new());
        registry.register(ProviderDescriptor::fast_money()).unwrap();
        let factory = AmountFactoryBuilder::new()
            .with_config(AmountsConfig::performance_first())
            .with_provider_source(registry)
            .build()
            .unwrap();
        assert_eq!(factory.resolve_amount_type(None).unwrap(), AmountType::FAST_MONEY);
    }
}

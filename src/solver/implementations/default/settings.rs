use crate::solver::core::strategies::SingletonPenalty;
use crate::{algebra::*, solver::core::SettingsError};
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Settings for the [`DefaultSolver`](super::DefaultSolver)

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefaultSettings<T: FloatT> {
    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,

    ///absolute tolerance on the difference between total supply and total demand
    #[builder(default = "T::zero()")]
    pub balance_tol: T,

    ///penalty for a Vogel line with a single live cell ("zero" or "cost")
    #[builder(default = r#""zero".to_string()"#)]
    pub vogel_singleton_penalty: String,

    ///print the transportation table when verbose
    #[builder(default = "true")]
    pub print_table: bool,
}

impl<T> Default for DefaultSettings<T>
where
    T: FloatT,
{
    fn default() -> DefaultSettings<T> {
        DefaultSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> DefaultSettings<T>
where
    T: FloatT,
{
    /// Check all fields, for settings that were not made with the builder
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_balance_tol(self.balance_tol)?;
        validate_singleton_penalty(&self.vogel_singleton_penalty)?;
        Ok(())
    }

    pub(crate) fn singleton_penalty(&self) -> Result<SingletonPenalty, SettingsError> {
        self.vogel_singleton_penalty.parse()
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for DefaultSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        DefaultSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> DefaultSettingsBuilder<T>
where
    T: FloatT,
{
    /// check the fields that have been explicitly set
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tol) = self.balance_tol {
            validate_balance_tol(tol)?;
        }
        if let Some(ref penalty) = self.vogel_singleton_penalty {
            validate_singleton_penalty(penalty)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_balance_tol<T: FloatT>(tol: T) -> Result<(), SettingsError> {
    if tol.is_finite() && tol >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("balance_tol"))
    }
}

fn validate_singleton_penalty(penalty: &str) -> Result<(), SettingsError> {
    penalty.parse::<SingletonPenalty>().map(|_| ())
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = DefaultSettingsBuilder::<f64>::default().build().unwrap();
    assert!(!settings.verbose);
    assert_eq!(settings.balance_tol, 0.);
    assert_eq!(settings.singleton_penalty(), Ok(SingletonPenalty::Zero));

    // fail on unknown singleton penalty
    assert!(DefaultSettingsBuilder::<f64>::default()
        .vogel_singleton_penalty("foo".to_string())
        .build()
        .is_err());

    // fail on bad tolerances
    assert!(DefaultSettingsBuilder::<f64>::default()
        .balance_tol(-1.0)
        .build()
        .is_err());
    assert!(DefaultSettingsBuilder::<f64>::default()
        .balance_tol(f64::NAN)
        .build()
        .is_err());

    // textbook variant is accepted
    let settings = DefaultSettingsBuilder::<f64>::default()
        .vogel_singleton_penalty("cost".to_string())
        .balance_tol(1e-9)
        .build()
        .unwrap();
    assert_eq!(settings.singleton_penalty(), Ok(SingletonPenalty::Cost));

    // directly construct a bad DefaultSettings and manually check
    let settings = DefaultSettings::<f64> {
        vogel_singleton_penalty: "foo".to_string(),
        ..DefaultSettings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("vogel_singleton_penalty"))
    );
}

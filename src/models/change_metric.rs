use derive_getters::Getters;
use derive_new::new;

use super::PriceField;

#[derive(Clone, Copy, Debug, Getters, PartialEq, new)]
pub struct ChangeMetric {
    field: PriceField,
    first_value: f64,
    last_value: f64,
    percent_change: f64,
}

impl ChangeMetric {
    pub fn is_positive(&self) -> bool {
        self.percent_change >= 0.0
    }
}

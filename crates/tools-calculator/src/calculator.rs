use crate::CalculatorInputs;
use crate::built_in::{
    age::AgeCalculator, cgpa::CgpaCalculator, emi::EmiCalculator, gst::GstCalculator,
};
use crate::error::RegistryError;
use crate::plugin_manager::PluginManager;

/// Name-based dispatch over the built-in calculators.
pub struct CalculatorRegistry {
    plugin_manager: PluginManager,
}

impl Default for CalculatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorRegistry {
    pub fn new() -> Self {
        Self::with_age_calculator(AgeCalculator::default())
    }

    /// Build the registry around a specific age calculator, e.g. one with a fixed clock.
    pub fn with_age_calculator(age: AgeCalculator) -> Self {
        let mut plugin_manager = PluginManager::new();
        plugin_manager.register(Box::new(age));
        plugin_manager.register(Box::new(CgpaCalculator));
        plugin_manager.register(Box::new(GstCalculator));
        plugin_manager.register(Box::new(EmiCalculator));
        Self { plugin_manager }
    }

    pub fn contains(&self, calculator_name: &str) -> bool {
        self.plugin_manager.get(calculator_name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.plugin_manager.names()
    }

    pub fn calculate(
        &self,
        calculator_name: &str,
        inputs: &CalculatorInputs,
    ) -> Result<serde_json::Value, RegistryError> {
        let plugin = self
            .plugin_manager
            .get(calculator_name)
            .ok_or_else(|| RegistryError::UnknownCalculator(calculator_name.to_string()))?;
        Ok(plugin.calculate(inputs)?)
    }
}

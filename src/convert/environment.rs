use crate::model::postman::{EnvValue, Environment};
use crate::model::yaak;

/// Convert one source environment into a Postman environment document.
/// Variables missing a name or a value are dropped.
pub fn convert_environment(environment: &yaak::Environment) -> Environment {
    let values = environment
        .variables
        .iter()
        .filter(|v| !v.name.is_empty() && !v.value.is_empty())
        .map(|v| EnvValue {
            key: v.name.clone(),
            value: v.value.clone(),
            kind: "default".to_string(),
            enabled: v.enabled,
        })
        .collect();

    Environment {
        name: environment.name.clone(),
        values,
        variable_scope: "environment".to_string(),
    }
}

use std::collections::HashMap;

use super::binding::Binding;

/// Named bindings owned by one parser instance.
#[derive(Debug)]
pub struct Environment {
    bindings: HashMap<String, Binding>,
}

impl Environment {
    /// Creates an environment holding only the named constants.
    pub fn new() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(String::from("true"), Binding::fixed(1.0));
        bindings.insert(String::from("false"), Binding::fixed(0.0));
        bindings.insert(String::from("Infinity"), Binding::fixed(f64::INFINITY));
        bindings.insert(String::from("infinity"), Binding::fixed(f64::INFINITY));
        bindings.insert(String::from("PI"), Binding::fixed(std::f64::consts::PI));
        bindings.insert(String::from("pi"), Binding::fixed(std::f64::consts::PI));

        Environment { bindings }
    }

    /// Returns the binding for `name`, declaring it as a mutable `0` on first use.
    pub fn lookup(&mut self, name: &str) -> Binding {
        if let Some(binding) = self.bindings.get(name) {
            return binding.clone();
        }

        tracing::trace!(name, "declaring variable");
        let binding = Binding::variable(0.0);
        self.bindings.insert(name.to_string(), binding.clone());
        binding
    }

    /// Returns the binding for `name` without declaring it.
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

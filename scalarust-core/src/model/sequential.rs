use crate::error::ScalarustError;
use crate::linalg::Vector;
use crate::nn::module::Module;
use crate::nn::parameter::ParamTree;

/// Chains modules; the output of each is the input of the next.
#[derive(Debug, Default)]
pub struct Sequential {
    modules: Vec<Box<dyn Module>>,
}

impl Sequential {
    pub fn new() -> Self {
        Sequential {
            modules: Vec::new(),
        }
    }

    /// Appends `module`, builder style.
    pub fn with<M: Module + 'static>(mut self, module: M) -> Self {
        self.add_module(Box::new(module));
        self
    }

    pub fn add_module(&mut self, module: Box<dyn Module>) {
        self.modules.push(module);
    }

    pub fn modules_list(&self) -> &[Box<dyn Module>] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Module for Sequential {
    /// An empty container returns its input unchanged.
    fn forward(&self, input: &Vector) -> Result<Vector, ScalarustError> {
        let mut current_input = input.clone();
        for module in &self.modules {
            current_input = module.forward(&current_input)?;
        }
        Ok(current_input)
    }

    /// `Map{"0": …, "1": …}`, one entry per module in insertion order.
    fn parameters(&self) -> ParamTree {
        ParamTree::map(
            self.modules
                .iter()
                .enumerate()
                .map(|(i, m)| (i.to_string(), m.parameters())),
        )
    }
}

#[cfg(test)]
#[path = "sequential_test.rs"]
mod tests;

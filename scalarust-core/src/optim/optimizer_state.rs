use std::collections::BTreeMap;

use log::warn;

use crate::error::ScalarustError;
use crate::nn::parameter::ParamTree;
use crate::node::Node;

/// Per-parameter optimizer state. Each optimizer uses exactly one variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamState {
    /// Stateless rules (plain SGD).
    Empty,
    /// Previous update `Δ` (momentum SGD).
    Momentum { momentum: f64 },
    /// Running squared-gradient statistic (AdaGrad, RMSProp).
    Scale { scale: f64 },
    /// First and second moment estimates (Adam).
    Moments { moment_1: f64, moment_2: f64 },
}

impl ParamState {
    pub fn kind(&self) -> &'static str {
        match self {
            ParamState::Empty => "Empty",
            ParamState::Momentum { .. } => "Momentum",
            ParamState::Scale { .. } => "Scale",
            ParamState::Moments { .. } => "Moments",
        }
    }
}

/// Optimizer state with the same shape as the parameter tree it serves.
#[derive(Debug, Clone, PartialEq)]
pub enum StateTree {
    Leaf(ParamState),
    Map(BTreeMap<String, StateTree>),
    List(Vec<StateTree>),
}

fn mismatch(path: &str, detail: String) -> ScalarustError {
    let at = if path.is_empty() { "<root>" } else { path };
    ScalarustError::StructureMismatch(format!("at {}: {}", at, detail))
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn branch_kind(params: &ParamTree) -> &'static str {
    match params {
        ParamTree::Leaf(_) => "leaf",
        ParamTree::Map(_) => "map",
        ParamTree::List(_) => "list",
    }
}

impl StateTree {
    /// Builds a tree shaped like `params` with `initial` at every leaf.
    pub fn mirror(params: &ParamTree, initial: &ParamState) -> StateTree {
        match params {
            ParamTree::Leaf(_) => StateTree::Leaf(initial.clone()),
            ParamTree::Map(entries) => StateTree::Map(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), StateTree::mirror(v, initial)))
                    .collect(),
            ),
            ParamTree::List(items) => {
                StateTree::List(items.iter().map(|v| StateTree::mirror(v, initial)).collect())
            }
        }
    }

    /// Every state leaf, in the same order as [`ParamTree::leaves`].
    pub fn leaves(&self) -> Vec<&ParamState> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a ParamState>) {
        match self {
            StateTree::Leaf(state) => out.push(state),
            StateTree::Map(entries) => entries.values().for_each(|t| t.collect_leaves(out)),
            StateTree::List(items) => items.iter().for_each(|t| t.collect_leaves(out)),
        }
    }

    /// Checks that this tree has the shape of `params` and that every leaf
    /// holds a `kind` state.
    ///
    /// # Errors
    /// `StructureMismatch` naming the first diverging path.
    pub fn check_matches(&self, params: &ParamTree, kind: &str) -> Result<(), ScalarustError> {
        self.check_at(params, kind, "")
    }

    fn check_at(&self, params: &ParamTree, kind: &str, path: &str) -> Result<(), ScalarustError> {
        match (self, params) {
            (StateTree::Leaf(state), ParamTree::Leaf(_)) => {
                if state.kind() != kind {
                    return Err(mismatch(
                        path,
                        format!("expected {} state, found {}", kind, state.kind()),
                    ));
                }
                Ok(())
            }
            (StateTree::Map(states), ParamTree::Map(entries)) => {
                if !states.keys().eq(entries.keys()) {
                    return Err(mismatch(
                        path,
                        format!(
                            "keys {:?} do not match parameter keys {:?}",
                            states.keys().collect::<Vec<_>>(),
                            entries.keys().collect::<Vec<_>>()
                        ),
                    ));
                }
                for ((key, state), param) in states.iter().zip(entries.values()) {
                    state.check_at(param, kind, &child_path(path, key))?;
                }
                Ok(())
            }
            (StateTree::List(states), ParamTree::List(items)) => {
                if states.len() != items.len() {
                    return Err(mismatch(
                        path,
                        format!("{} state entries for {} parameters", states.len(), items.len()),
                    ));
                }
                for (i, (state, param)) in states.iter().zip(items).enumerate() {
                    state.check_at(param, kind, &format!("{}[{}]", path, i))?;
                }
                Ok(())
            }
            (state, param) => Err(mismatch(
                path,
                format!(
                    "state is a {} but parameter is a {}",
                    state.branch_kind(),
                    branch_kind(param)
                ),
            )),
        }
    }

    fn branch_kind(&self) -> &'static str {
        match self {
            StateTree::Leaf(_) => "leaf",
            StateTree::Map(_) => "map",
            StateTree::List(_) => "list",
        }
    }

    /// Visits every `(parameter, state)` leaf pair in lock-step.
    ///
    /// The shape is validated up front, so either every pair is visited or
    /// none is. A parameter whose gradient is not finite is still visited,
    /// after a warning.
    pub(crate) fn walk_mut<F>(
        &mut self,
        params: &ParamTree,
        kind: &str,
        f: &mut F,
    ) -> Result<(), ScalarustError>
    where
        F: FnMut(&Node, &mut ParamState) -> Result<(), ScalarustError>,
    {
        self.check_matches(params, kind)?;
        self.walk_at(params, f, "")
    }

    fn walk_at<F>(&mut self, params: &ParamTree, f: &mut F, path: &str) -> Result<(), ScalarustError>
    where
        F: FnMut(&Node, &mut ParamState) -> Result<(), ScalarustError>,
    {
        match (self, params) {
            (StateTree::Leaf(state), ParamTree::Leaf(node)) => {
                let grad = node.grad();
                if !grad.is_finite() {
                    warn!("optimizer step: parameter at {} has non-finite grad {}", path, grad);
                }
                f(node, state)
            }
            (StateTree::Map(states), ParamTree::Map(entries)) => {
                for ((key, state), param) in states.iter_mut().zip(entries.values()) {
                    state.walk_at(param, f, &child_path(path, key))?;
                }
                Ok(())
            }
            (StateTree::List(states), ParamTree::List(items)) => {
                for (i, (state, param)) in states.iter_mut().zip(items).enumerate() {
                    state.walk_at(param, f, &format!("{}[{}]", path, i))?;
                }
                Ok(())
            }
            (state, param) => Err(mismatch(
                path,
                format!(
                    "state is a {} but parameter is a {}",
                    state.branch_kind(),
                    branch_kind(param)
                ),
            )),
        }
    }
}

/// Error for a state leaf of the wrong variant, reported from inside an
/// update rule.
pub(crate) fn unexpected_state(expected: &str, found: &ParamState) -> ScalarustError {
    ScalarustError::StructureMismatch(format!(
        "expected {} state, found {}",
        expected,
        found.kind()
    ))
}

#[cfg(test)]
#[path = "optimizer_state_test.rs"]
mod tests;

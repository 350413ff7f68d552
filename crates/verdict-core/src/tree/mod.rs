//! Decision-tree definitions
//!
//! A tree is authored as a JSON document and deserialized into the [`Node`]
//! sum type. The five node shapes are disambiguated structurally, in a fixed
//! precedence order, so authoring stays forgiving: anything that matches no
//! known shape becomes an empty node instead of an error.

mod loader;
mod node;
mod requirements;

pub use node::{
    average, FactorNode, GroupNode, Node, OptionEntry, Question, ValueNode, DEFAULT_OPTION,
};
pub use requirements::{Criterion, Requirements};

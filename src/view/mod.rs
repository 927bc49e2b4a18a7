pub mod html;
pub mod node;

pub use node::{Element, Node};

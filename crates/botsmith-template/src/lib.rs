//! botsmith-template: the response-template model.
//!
//! A response template is the text a skill sends back to chat when it
//! finishes running. The text may embed a small placeholder mini-language:
//!
//! ```text
//! Hello {name}!
//! {for item in successResult.items}
//! - {item.label}
//! {endfor}
//! {if successResult.ok}Done{else}Failed{endif}
//! ```
//!
//! Surface grammar:
//! - Placeholder: `{name}` or `{name.path.to.field}`
//! - Loop: `{for <var> in <expr>} ... {endfor}`
//! - Conditional: `{if <expr>} ... {else} ... {endif}` (else optional)
//! - Built-in: `{successResult}` or `{successResult.<path>}`
//!
//! Everything here is advisory analysis for the editor: feature checks that
//! drive a help checklist, and unknown-parameter detection that drives
//! non-blocking warnings. Malformed syntax is never rejected. Placeholders
//! are recognized with a single non-greedy regex pass; nested or escaped
//! braces are not supported and will mis-parse.

pub mod classify;
pub mod markdown;
pub mod scanner;
pub mod validate;

mod template;

pub use template::ResponseTemplate;

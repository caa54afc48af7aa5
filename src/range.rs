//! Range calculation for offense highlighting and edit boundaries.
//!
//! Rules rarely flag a whole node: they flag a verb token through a closing
//! keyword, or carve one key-value pair out of an argument list together with
//! its separating punctuation. The helpers here derive those ranges from node
//! location metadata so the resulting edits splice cleanly.

use crate::ast::Node;
use crate::span::SourceRange;

/// Range from a call's selector token through a compound expression's
/// closing token.
///
/// Used to flag an entire `do .. end` region starting at the method name.
/// Returns `None` when either token is absent from the location metadata.
pub fn selector_through_end(call: &Node, closing: &Node) -> Option<SourceRange> {
    let selector = call.loc().selector?;
    let end = closing.loc().end?;
    Some(selector.join(end))
}

/// Removal range for one pair of a hash-style argument list.
///
/// The range covers the pair and the punctuation separating it from its
/// neighbours:
///
/// - with a left sibling, from the sibling's end to the pair's end;
/// - first of several, from the pair's start to the next sibling's start;
/// - sole element of the call's sole argument, from just after the call's
///   selector to the end of the call expression (dropping the parentheses
///   entirely).
///
/// Returns `None` when the geometry is undecidable (no sibling and the hash
/// is not the sole argument); callers should then skip the correction rather
/// than risk a bad splice.
pub fn pair_removal_range(call: &Node, hash: &Node, pair_index: usize) -> Option<SourceRange> {
    let pair = hash.children().get(pair_index)?;

    if pair_index > 0 {
        let previous = &hash.children()[pair_index - 1];
        return Some(previous.range().collapse_to_end().join(pair.range()));
    }

    if let Some(next) = hash.children().get(pair_index + 1) {
        return Some(pair.range().join(next.range().collapse_to_start()));
    }

    // Sole pair: remove the whole argument list, parentheses included.
    if call.children().len() == 1 && hash.children().len() == 1 {
        let selector = call.loc().selector?;
        return Some(selector.collapse_to_end().join(call.range().collapse_to_end()));
    }

    None
}

//! The fill-rewrite pass over a parsed icon document.
//!
//! [`apply_fill`] walks the expected shape of an icon file — `g` groups
//! directly under the root `svg` element, fill-able shape elements one
//! level under each group — and overwrites the `fill` attribute on every
//! matching element. Input that does not have that shape is left alone;
//! the pass never fails.

use log::{debug, info, warn};

use madder_dom::{Document, Node};

/// Element names that take a `fill` override, checked in this order
/// within each group.
pub const FILLABLE_ELEMENTS: [&str; 3] = ["path", "shape", "polygon"];

/// What a fill-rewrite pass did to a document.
///
/// `overwritten` counts the painted elements that already carried a
/// `fill` attribute; each of those is also logged as it is replaced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PaintSummary {
    /// Number of elements whose `fill` attribute was set.
    pub painted: usize,
    /// Number of painted elements that had an existing `fill` replaced.
    pub overwritten: usize,
}

/// Overwrite the `fill` attribute of every fill-able element in the
/// document with `color`, in place.
///
/// The walk is shallow and deterministic: groups in document order, the
/// [`FILLABLE_ELEMENTS`] names in their fixed order within each group,
/// elements of each name in document order. Only child elements of a
/// group are touched — nothing nested deeper, and no element outside a
/// `g` under the root `svg`.
///
/// `color` is stored verbatim; callers normalize it (leading `#`)
/// before the pass. Documents without an `svg` root or without any `g`
/// groups are left unchanged — a logged no-op, not an error.
pub fn apply_fill(document: &mut Document, color: &str) -> PaintSummary {
    let mut summary = PaintSummary::default();

    let root = document.root_mut();
    if root.name() != "svg" {
        info!(root = root.name(); "no `svg` root element, ignoring");
        return summary;
    }

    let mut groups = 0usize;
    for node in root.children_mut() {
        let Node::Element(group) = node else { continue };
        if group.name() != "g" {
            continue;
        }
        groups += 1;

        for element_name in FILLABLE_ELEMENTS {
            debug!(element = element_name; "checking for fill-able elements");
            for child in group.children_mut() {
                let Node::Element(element) = child else { continue };
                if element.name() != element_name {
                    continue;
                }

                if let Some(previous) = element.attribute("fill") {
                    warn!(element = element_name, previous = previous; "existing fill value will be overwritten");
                    summary.overwritten += 1;
                }
                element.set_attribute("fill", color);
                summary.painted += 1;
            }
        }
    }

    if groups == 0 {
        info!("no `g` groups under `svg`, ignoring");
    } else {
        debug!(painted = summary.painted, overwritten = summary.overwritten; "fill attributes applied");
    }

    summary
}

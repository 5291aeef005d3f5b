//! Trigger/panel pairing check.
//!
//! Triggers and panels of one scope are linked only by a shared identifier.
//! After a root widget assembles its tree it walks it once and warns about
//! every identifier that appears on one side only.

use zenith_dom::{Element, walk};

use crate::error::{PairingWarning, Part};
use crate::scope::{Family, ScopeId};
use crate::widgets::data;

/// Find unmatched triggers and panels belonging to `scope` within `root`.
///
/// Elements of other scopes (nested compounds) are ignored. Each warning is
/// also logged.
pub fn check_pairs(root: &Element, scope: ScopeId, family: Family) -> Vec<PairingWarning> {
    let scope = scope.to_string();
    let mut triggers: Vec<&str> = Vec::new();
    let mut panels: Vec<&str> = Vec::new();

    walk(root, &mut |element| {
        if element.get_data(data::SCOPE) != Some(scope.as_str()) {
            return;
        }
        let Some(id) = element.get_data(data::FOR) else {
            return;
        };
        let side = match element.get_data(data::PART) {
            Some(data::PART_TRIGGER) => &mut triggers,
            Some(data::PART_PANEL) => &mut panels,
            _ => return,
        };
        if !side.contains(&id) {
            side.push(id);
        }
    });

    let mut warnings = Vec::new();
    for id in triggers.iter().filter(|id| !panels.contains(*id)) {
        warnings.push(PairingWarning {
            family,
            id: id.to_string(),
            missing: Part::Panel,
        });
    }
    for id in panels.iter().filter(|id| !triggers.contains(*id)) {
        warnings.push(PairingWarning {
            family,
            id: id.to_string(),
            missing: Part::Trigger,
        });
    }

    for warning in &warnings {
        log::warn!("{}", warning);
    }
    warnings
}

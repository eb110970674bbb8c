//! Known values of the `Wm Name` column.
//!
//! The set is open: anything else passes through verbatim, is shown without
//! an icon and is ignored when deriving schedules.

pub const LOGON: &str = "LOGON";
pub const LOGOFF: &str = "LOGOFF";
pub const AUX: &str = "AUX";

const ICON_LOGON: &str = "⚡";
const ICON_LOGOFF: &str = "⭘";
const ICON_AUX: &str = "🔄";

pub fn is_logon(kind: &str) -> bool {
    kind == LOGON
}

pub fn is_logoff(kind: &str) -> bool {
    kind == LOGOFF
}

pub fn is_aux(kind: &str) -> bool {
    kind == AUX
}

/// Icon shown beside an activity, `None` for unrecognized event types.
pub fn icon_for(kind: &str) -> Option<&'static str> {
    if is_logon(kind) {
        Some(ICON_LOGON)
    } else if is_logoff(kind) {
        Some(ICON_LOGOFF)
    } else if is_aux(kind) {
        Some(ICON_AUX)
    } else {
        None
    }
}

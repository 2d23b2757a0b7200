//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. All call sites are additionally gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit UI interaction logs (tab switches, input changes, predict clicks).
    pub print_ui_interactions: bool,
    /// Emit request/response details for every call to the sales service.
    pub print_api_traffic: bool,
    /// Emit history insertions and evictions.
    pub print_history_updates: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: false,
    print_api_traffic: false,
    print_history_updates: false,
    print_state_serde: false,
};

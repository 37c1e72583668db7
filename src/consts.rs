//! VM parameters shared across modules.

/// Register count: the UM exposes exactly eight general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Number of segment ids pre-seeded onto the free list at VM creation.
///
/// Purely an allocation-locality optimization: it makes the first few `map`
/// calls in a typical program return small, predictable ids. Not observable
/// by any program; changing it cannot change behavior, only which ids a
/// sequence of maps happens to return relative to each other being freed
/// first.
pub const FREE_LIST_PRESEED: u32 = 16;

/// Width, in bits, of the LV instruction's immediate field.
pub const LV_IMMEDIATE_BITS: u32 = 25;

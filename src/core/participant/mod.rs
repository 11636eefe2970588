pub mod participant;
pub mod role;

pub use participant::*;
pub use role::*;


//---------------------------------------------------------------------
pub const ACTIVE: i32 = 0;
pub const RELAY: i32 = 1;
pub const HALTED: i32 = 2;

#[inline]
pub fn is_active(role_i32: i32) -> bool {
    role_i32 == ACTIVE
}

#[inline]
pub fn is_relay(role_i32: i32) -> bool {
    role_i32 == RELAY
}

#[inline]
pub fn is_halted(role_i32: i32) -> bool {
    role_i32 == HALTED
}

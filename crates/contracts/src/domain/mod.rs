pub mod awareness;
pub mod bookings;
pub mod centers;
pub mod events;
pub mod guidelines;

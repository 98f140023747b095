/// Numeric conversion helpers.
///
/// This module provides the conversions between text and numbers that the
/// interpreter needs: reading a base-10 integer from a scan reply, turning a
/// numeric literal into a value, and printing a number the way `printf`
/// shows it.
pub mod num;

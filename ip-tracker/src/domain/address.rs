//! Syntax checks for user-supplied IP addresses.
//!
//! The IPv6 grammar only accepts the full eight-group form. `::` zero
//! compression, embedded IPv4 tails and zone ids are all rejected, which
//! rules out `std::net::Ipv6Addr` parsing.

/// Returns true when `input` is a dotted-quad IPv4 address or a full
/// eight-group IPv6 address. Input is not trimmed.
pub fn is_valid_ip(input: &str) -> bool {
    is_ipv4(input) || is_ipv6(input)
}

/// Four `.`-separated groups of 1-3 decimal digits, each at most 255.
/// Leading zeros are allowed (`010.001.0.1`).
pub fn is_ipv4(input: &str) -> bool {
    has_groups(input, '.', 4, is_octet)
}

/// Eight `:`-separated groups of 1-4 hexadecimal digits.
pub fn is_ipv6(input: &str) -> bool {
    has_groups(input, ':', 8, is_hextet)
}

fn has_groups(input: &str, sep: char, expected: usize, group_ok: fn(&str) -> bool) -> bool {
    let mut count = 0;
    for group in input.split(sep) {
        count += 1;
        if count > expected || !group_ok(group) {
            return false;
        }
    }
    count == expected
}

fn is_octet(group: &str) -> bool {
    (1..=3).contains(&group.len())
        && group.bytes().all(|b| b.is_ascii_digit())
        && group.parse::<u16>().is_ok_and(|v| v <= 255)
}

fn is_hextet(group: &str) -> bool {
    (1..=4).contains(&group.len()) && group.bytes().all(|b| b.is_ascii_hexdigit())
}

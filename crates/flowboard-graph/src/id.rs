use std::sync::atomic::{AtomicU64, Ordering};

/// Length of ids produced by [`RandomIdGenerator::new`]
pub const DEFAULT_ID_LENGTH: usize = 9;

/// Source of fresh node and edge ids
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random fixed-length alphanumeric ids.
///
/// Collision resistant within a session, not guaranteed unique; the graph model
/// rejects collisions instead of overwriting.
#[derive(Debug, Clone)]
pub struct RandomIdGenerator {
    length: usize,
}

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self::with_length(DEFAULT_ID_LENGTH)
    }

    pub fn with_length(length: usize) -> Self {
        Self { length: length.max(1) }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Base-36 digits taken from each uuid, the low end of its 128 bits
const DIGITS_PER_UUID: usize = 20;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> String {
        let mut id = String::with_capacity(self.length);
        while id.len() < self.length {
            let mut bits = uuid::Uuid::new_v4().as_u128();
            for _ in 0..DIGITS_PER_UUID.min(self.length - id.len()) {
                id.push(ALPHABET[(bits % 36) as usize] as char);
                bits /= 36;
            }
        }
        id
    }
}

/// Deterministic `{prefix}{n}` ids, counting from 1
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_ids_have_fixed_length() {
        let generator = RandomIdGenerator::new();
        let id = generator.next_id();
        assert_eq!(id.len(), DEFAULT_ID_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

        let long = RandomIdGenerator::with_length(40).next_id();
        assert_eq!(long.len(), 40);
    }

    #[test]
    fn test_random_ids_use_full_alphabet() {
        let generator = RandomIdGenerator::with_length(64);
        let seen: HashSet<char> = (0..200)
            .flat_map(|_| generator.next_id().chars().collect::<Vec<_>>())
            .collect();

        assert!(seen.iter().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert!(seen.iter().any(|c| ('g'..='z').contains(c)));
        assert_eq!(seen.len(), 36);
    }

    #[test]
    fn test_random_ids_do_not_repeat_in_a_session() {
        let generator = RandomIdGenerator::new();
        let ids: HashSet<String> = (0..1000).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_sequential_ids() {
        let generator = SequentialIdGenerator::new("n");
        assert_eq!(generator.next_id(), "n1");
        assert_eq!(generator.next_id(), "n2");
    }
}

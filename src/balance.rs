use crate::collections::{Stack, StackLike};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum BalanceError {
    #[error("unexpected `{found}` at byte {position} with nothing open")]
    UnexpectedClose { position: usize, found: char },
    #[error("expected `{expected}` but found `{found}` at byte {position}")]
    Mismatched {
        position: usize,
        expected: char,
        found: char,
    },
    #[error("`{open}` opened at byte {position} is never closed")]
    Unclosed { position: usize, open: char },
}

#[inline]
fn closer_of(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

#[inline]
fn is_closer(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

/// Checks that every `(`, `[` and `{` in `text` is closed by its partner in nesting order.
///
/// Any other character is ignored.
pub fn check_balanced(text: &str) -> Result<(), BalanceError> {
    let mut stack = Stack::with_capacity(text.len() / 2);
    for (position, c) in text.char_indices() {
        if let Some(expected) = closer_of(c) {
            stack.push((position, c, expected));
        } else if is_closer(c) {
            let Some((_, _, expected)) = stack.pop() else {
                return Err(BalanceError::UnexpectedClose { position, found: c });
            };
            if expected != c {
                return Err(BalanceError::Mismatched {
                    position,
                    expected,
                    found: c,
                });
            }
        }
    }
    match stack.peek() {
        Some(&(position, open, _)) => Err(BalanceError::Unclosed { position, open }),
        None => Ok(()),
    }
}

#[inline]
pub fn is_balanced(text: &str) -> bool {
    check_balanced(text).is_ok()
}

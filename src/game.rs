use crate::collections::{ContainerCommon, QueueLike, StackQueue};

/// Hands out turns round-robin over a fixed table of players.
///
/// Every seat is independent, so a player added twice gets two turns per round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGameManager<P> {
    players: StackQueue<P>,
}

impl<P: Clone> BoardGameManager<P> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            players: StackQueue::new(),
        }
    }

    #[inline]
    pub fn add_player(&mut self, player: P) {
        self.players.enqueue(player);
    }

    /// Returns whose turn it is and moves them to the back of the table.
    pub fn next_player(&mut self) -> Option<P> {
        let player = self.players.dequeue()?;
        self.players.enqueue(player.clone());
        crate::trace!(seats = self.players.len(), "rotated to next player");
        Some(player)
    }

    /// Who [`next_player`](Self::next_player) will return, without rotating.
    #[inline]
    pub fn peek_player(&self) -> Option<&P> {
        self.players.peek()
    }

    #[inline]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl<P: Clone> Default for BoardGameManager<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone> FromIterator<P> for BoardGameManager<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            players: iter.into_iter().collect(),
        }
    }
}

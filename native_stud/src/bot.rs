//! A simple probabilistic table bot.

use stud_shared::BetRange;

/// Bot policy: mostly calls, folds more as the price goes up, and raises
/// a fixed fraction of the time when raising is open.
pub struct SimpleBot {
    pub base_fold_chance: f64,
    pub raise_chance: f64,
}

impl Default for SimpleBot {
    fn default() -> Self {
        SimpleBot {
            base_fold_chance: 0.08,
            raise_chance: 0.2,
        }
    }
}

impl SimpleBot {
    /// Pick a reply for the offered range: `-1` folds, `0` stands pat,
    /// positive values commit chips. Replies always land inside the range;
    /// the engine clamps short stacks to all-in on its own.
    pub fn decide(&self, range: BetRange) -> i64 {
        let roll: f64 = rand::random();

        if range.call == 0 {
            // Nothing to call. Open sometimes, otherwise stand pat.
            if range.cap > 0 && roll < self.raise_chance {
                return i64::from((range.cap + 1) / 2).max(1);
            }
            return 0;
        }

        if range.cap <= range.call {
            // Betting is locked to a flat call.
            if roll < self.base_fold_chance {
                return -1;
            }
            return i64::from(range.call);
        }

        let price = f64::from(range.call) / f64::from(range.cap);
        let fold_chance = self.base_fold_chance + 0.2 * price;
        if roll < fold_chance {
            return -1;
        }
        if roll < fold_chance + self.raise_chance {
            let spread = range.cap - range.call;
            let raise = range.call + (spread + 1) / 2;
            return i64::from(raise.min(range.cap));
        }
        i64::from(range.call)
    }
}

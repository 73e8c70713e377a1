use super::card::Card;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::strength::Strength;

/// Ranks a 5-to-7 card set by choosing its best 5-card combination. A pure function: no I/O, no
/// mutation, and bounded at `C(7,5) = 21` five-card evaluations regardless of input (SPEC_FULL.md
/// §4.3).
pub fn evaluate(cards: &[Card]) -> Strength {
    assert!(
        (5..=7).contains(&cards.len()),
        "evaluator needs 5 to 7 cards, got {}",
        cards.len()
    );
    combinations(cards.len(), 5)
        .map(|idxs| {
            let five: Vec<Card> = idxs.iter().map(|&i| cards[i]).collect();
            evaluate_five(&five)
        })
        .max()
        .expect("at least one 5-card combination exists")
}

fn evaluate_five(cards: &[Card]) -> Strength {
    assert_eq!(cards.len(), 5);
    let is_flush = cards.windows(2).all(|w| w[0].suit() == w[1].suit());
    let straight_high = straight_high(cards);

    let mut counts = [0u8; 13];
    for c in cards {
        counts[c.rank() as usize] += 1;
    }
    // (count, rank) pairs sorted by count desc, then rank desc
    let mut groups: Vec<(u8, Rank)> = (0..13u8)
        .filter(|&i| counts[i as usize] > 0)
        .map(|i| (counts[i as usize], Rank::from(i)))
        .collect();
    groups.sort_unstable_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

    let kick = |skip: &[Rank], take: usize| -> Kickers {
        let ranks = groups
            .iter()
            .map(|(_, r)| *r)
            .filter(|r| !skip.contains(r))
            .take(take)
            .collect();
        Kickers::new(ranks)
    };

    match (is_flush, straight_high, groups[0].0) {
        (true, Some(high), _) => Strength::new(Ranking::StraightFlush(high), Kickers::none()),
        (_, _, 4) => {
            let quad = groups[0].1;
            Strength::new(Ranking::FourOfAKind(quad), kick(&[quad], 1))
        }
        (_, _, 3) if groups[1].0 == 2 => {
            Strength::new(Ranking::FullHouse(groups[0].1, groups[1].1), Kickers::none())
        }
        (true, _, _) => {
            let mut ranks: Vec<Rank> = cards.iter().map(|c| c.rank()).collect();
            ranks.sort_unstable_by(|a, b| b.cmp(a));
            Strength::new(Ranking::Flush(ranks[0]), Kickers::new(ranks[1..].to_vec()))
        }
        (_, Some(high), _) => Strength::new(Ranking::Straight(high), Kickers::none()),
        (_, _, 3) => {
            let trips = groups[0].1;
            Strength::new(Ranking::ThreeOfAKind(trips), kick(&[trips], 2))
        }
        (_, _, 2) if groups[1].0 == 2 => {
            let (hi, lo) = (groups[0].1.max(groups[1].1), groups[0].1.min(groups[1].1));
            Strength::new(Ranking::TwoPair(hi, lo), kick(&[hi, lo], 1))
        }
        (_, _, 2) => {
            let pair = groups[0].1;
            Strength::new(Ranking::OnePair(pair), kick(&[pair], 3))
        }
        _ => {
            let high = groups[0].1;
            Strength::new(Ranking::HighCard(high), kick(&[high], 4))
        }
    }
}

/// highest card of a straight among these 5 cards' ranks, if any; the wheel (A-2-3-4-5) ranks as
/// a Five-high straight, never as an ace-high one
fn straight_high(cards: &[Card]) -> Option<Rank> {
    let mut bits: u16 = 0;
    for c in cards {
        bits |= 1 << (c.rank() as u8);
    }
    if bits.count_ones() != 5 {
        return None; // a pair/trips/quads can't also be a straight
    }
    const WHEEL: u16 = 0b1_0000_0000_1111; // A,5,4,3,2
    if bits == WHEEL {
        return Some(Rank::Five);
    }
    for low in (0..=8u8).rev() {
        let window: u16 = 0b11111 << low;
        if bits == window {
            return Some(Rank::from(low + 4));
        }
    }
    None
}

/// all length-`k` index combinations of `0..n`, in no particular order
fn combinations(n: usize, k: usize) -> impl Iterator<Item = Vec<usize>> {
    let mut idx: Vec<usize> = (0..k).collect();
    let mut done = k > n;
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let current = idx.clone();
        let mut i = k;
        loop {
            if i == 0 {
                done = true;
                break;
            }
            i -= 1;
            if idx[i] != i + n - k {
                idx[i] += 1;
                for j in (i + 1)..k {
                    idx[j] = idx[j - 1] + 1;
                }
                break;
            }
            if i == 0 {
                done = true;
            }
        }
        Some(current)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::suit::Suit;

    fn card(r: Rank, s: Suit) -> Card {
        Card::new(r, s)
    }

    #[test]
    fn combinations_count_matches_binomial() {
        assert_eq!(combinations(7, 5).count(), 21);
        assert_eq!(combinations(5, 5).count(), 1);
        assert_eq!(combinations(6, 5).count(), 6);
    }

    #[test]
    fn royal_flush_beats_everything() {
        let royal = [
            card(Rank::Ace, Suit::Spade),
            card(Rank::King, Suit::Spade),
            card(Rank::Queen, Suit::Spade),
            card(Rank::Jack, Suit::Spade),
            card(Rank::Ten, Suit::Spade),
        ];
        let quads = [
            card(Rank::Two, Suit::Club),
            card(Rank::Two, Suit::Diamond),
            card(Rank::Two, Suit::Heart),
            card(Rank::Two, Suit::Spade),
            card(Rank::Ace, Suit::Club),
        ];
        assert!(evaluate(&royal) > evaluate(&quads));
        assert!(matches!(evaluate(&royal).ranking(), Ranking::StraightFlush(Rank::Ace)));
    }

    #[test]
    fn wheel_straight_ranks_as_five_high() {
        let wheel = [
            card(Rank::Ace, Suit::Spade),
            card(Rank::Two, Suit::Club),
            card(Rank::Three, Suit::Diamond),
            card(Rank::Four, Suit::Heart),
            card(Rank::Five, Suit::Club),
        ];
        assert!(matches!(evaluate(&wheel).ranking(), Ranking::Straight(Rank::Five)));
        let six_high = [
            card(Rank::Two, Suit::Spade),
            card(Rank::Three, Suit::Club),
            card(Rank::Four, Suit::Diamond),
            card(Rank::Five, Suit::Heart),
            card(Rank::Six, Suit::Club),
        ];
        assert!(evaluate(&six_high) > evaluate(&wheel));
    }

    #[test]
    fn full_house_beats_flush_beats_straight() {
        let full_house = [
            card(Rank::Two, Suit::Club),
            card(Rank::Two, Suit::Diamond),
            card(Rank::Two, Suit::Heart),
            card(Rank::Three, Suit::Club),
            card(Rank::Three, Suit::Diamond),
        ];
        let flush = [
            card(Rank::Two, Suit::Spade),
            card(Rank::Four, Suit::Spade),
            card(Rank::Six, Suit::Spade),
            card(Rank::Eight, Suit::Spade),
            card(Rank::Ten, Suit::Spade),
        ];
        let straight = [
            card(Rank::Two, Suit::Club),
            card(Rank::Three, Suit::Diamond),
            card(Rank::Four, Suit::Heart),
            card(Rank::Five, Suit::Spade),
            card(Rank::Six, Suit::Club),
        ];
        assert!(evaluate(&full_house) > evaluate(&flush));
        assert!(evaluate(&flush) > evaluate(&straight));
    }

    #[test]
    fn flush_ties_break_on_full_kicker_run() {
        let higher = [
            card(Rank::Ace, Suit::Spade),
            card(Rank::King, Suit::Spade),
            card(Rank::Nine, Suit::Spade),
            card(Rank::Five, Suit::Spade),
            card(Rank::Two, Suit::Spade),
        ];
        let lower = [
            card(Rank::Ace, Suit::Heart),
            card(Rank::King, Suit::Heart),
            card(Rank::Eight, Suit::Heart),
            card(Rank::Five, Suit::Heart),
            card(Rank::Two, Suit::Heart),
        ];
        assert!(evaluate(&higher) > evaluate(&lower));
    }

    #[test]
    fn seven_card_evaluation_picks_best_five() {
        // pair of twos on the board plus pocket aces makes trip aces, not two pair
        let seven = [
            card(Rank::Ace, Suit::Spade),
            card(Rank::Ace, Suit::Heart),
            card(Rank::Two, Suit::Club),
            card(Rank::Two, Suit::Diamond),
            card(Rank::Seven, Suit::Club),
            card(Rank::Nine, Suit::Heart),
            card(Rank::Jack, Suit::Spade),
        ];
        assert!(matches!(
            evaluate(&seven).ranking(),
            Ranking::TwoPair(Rank::Ace, Rank::Two)
        ));
    }

    #[test]
    fn totality_is_transitive_on_a_sample() {
        let hands: Vec<[Card; 5]> = vec![
            [
                card(Rank::Ace, Suit::Spade),
                card(Rank::King, Suit::Spade),
                card(Rank::Queen, Suit::Spade),
                card(Rank::Jack, Suit::Spade),
                card(Rank::Ten, Suit::Spade),
            ],
            [
                card(Rank::Two, Suit::Club),
                card(Rank::Two, Suit::Diamond),
                card(Rank::Two, Suit::Heart),
                card(Rank::Two, Suit::Spade),
                card(Rank::Ace, Suit::Club),
            ],
            [
                card(Rank::Three, Suit::Club),
                card(Rank::Three, Suit::Diamond),
                card(Rank::Three, Suit::Heart),
                card(Rank::Four, Suit::Club),
                card(Rank::Four, Suit::Diamond),
            ],
        ];
        let strengths: Vec<_> = hands.iter().map(|h| evaluate(h)).collect();
        for a in &strengths {
            for b in &strengths {
                for c in &strengths {
                    if a >= b && b >= c {
                        assert!(a >= c);
                    }
                }
            }
        }
    }
}

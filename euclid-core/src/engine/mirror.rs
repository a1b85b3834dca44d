use crate::types::Sequence;

/// Append a reversed copy, producing a forward-then-backward cycle of `2 * beats`
///
/// `out[beats + i] == input[beats - 1 - i]`, so the backward half starts on the
/// last forward pulse.
pub fn mirror_extend(sequence: Sequence, beats: u32) -> Sequence {
    debug_assert_eq!(sequence.len(), beats as usize);
    let mut pulses = sequence.into_pulses();
    let backward: Vec<_> = pulses.iter().rev().copied().collect();
    pulses.extend(backward);
    Sequence::new(pulses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_layout() {
        let mirrored = mirror_extend(Sequence::from_ints(&[1, 0, 0, 1, 1]), 5);
        assert_eq!(mirrored.to_ints(), vec![1, 0, 0, 1, 1, 1, 1, 0, 0, 1]);
    }

    #[test]
    fn test_mirror_single_beat() {
        assert_eq!(
            mirror_extend(Sequence::from_ints(&[1]), 1).to_ints(),
            vec![1, 1]
        );
    }
}

use crate::types::Sequence;

/// Rotate right by `offset` positions, reduced modulo `beats`
///
/// The last `offset % beats` pulses move to the front. An offset equal to
/// `beats` is the identity.
pub fn rotate(sequence: Sequence, offset: u32, beats: u32) -> Sequence {
    debug_assert_eq!(sequence.len(), beats as usize);
    if beats == 0 {
        return sequence;
    }
    let shift = (offset % beats) as usize;
    if shift == 0 {
        return sequence;
    }

    let mut head = sequence.into_pulses();
    let mut rotated = head.split_off(head.len() - shift);
    rotated.append(&mut head);
    Sequence::new(rotated)
}

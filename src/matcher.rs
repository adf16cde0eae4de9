/// Find the first occurrence of `needle` in `haystack`.
///
/// This is a single forward scan with a reset-on-mismatch cursor, not a full
/// substring search: on any mismatch the needle cursor restarts at zero
/// without re-testing the current byte, so a needle with a repeated internal
/// prefix can match later than (or instead of) its true first occurrence.
/// The completed-needle check also runs before each byte is examined, which
/// means a match ending flush with the end of the haystack is not reported.
/// The encoder depends on these exact semantics: reported matches are always
/// genuine occurrences, but some occurrences go unseen and become literals.
///
/// An empty needle matches at index 0 of any non-empty haystack.
pub fn locate<'a, H>(needle: &[u8], haystack: H) -> Option<usize>
where
    H: IntoIterator<Item = &'a u8>,
{
    let mut matched = 0;
    for (i, &byte) in haystack.into_iter().enumerate() {
        if matched == needle.len() {
            return Some(i - needle.len());
        }
        if byte == needle[matched] {
            matched += 1;
        } else {
            matched = 0;
        }
    }
    None
}

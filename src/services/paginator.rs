/// Splits the header plus result fragments into issue-sized bodies.
///
/// Fragments are never split. A fragment that alone exceeds the limit is placed
/// whole into a fresh chunk, which then exceeds the limit by that fragment's excess.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    max_chunk_size: usize,
}

impl Paginator {
    pub fn new(max_chunk_size: usize) -> Self {
        Self { max_chunk_size }
    }

    pub fn max_chunk_size(&self) -> usize {
        self.max_chunk_size
    }

    /// Always returns at least one chunk, and the first chunk always starts with `header`.
    pub fn paginate<S: AsRef<str>>(&self, header: String, fragments: &[S]) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut chunk_len = Self::length(&header);
        let mut chunk = header;

        for fragment in fragments {
            let fragment = fragment.as_ref();
            let fragment_len = Self::length(fragment);
            if chunk_len + fragment_len > self.max_chunk_size {
                chunks.push(std::mem::take(&mut chunk));
                chunk_len = 0;
            }
            chunk.push_str(fragment);
            chunk_len += fragment_len;
        }
        chunks.push(chunk);

        chunks
    }

    /// Size in UTF-16 code units, so characters outside the BMP count twice.
    pub fn length(text: &str) -> usize {
        text.encode_utf16().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_fragments_yields_header_only() {
        let chunks = Paginator::new(10).paginate::<&str>("header".to_string(), &[]);
        assert_eq!(chunks, vec!["header".to_string()]);
    }

    #[test]
    fn fragments_fill_until_limit() {
        let chunks = Paginator::new(10).paginate("hh".to_string(), &["aaaa", "bbbb", "cc", "dddddd"]);
        assert_eq!(chunks, vec!["hhaaaabbbb", "ccdddddd"]);
    }

    #[test]
    fn exact_fit_stays_in_chunk() {
        let chunks = Paginator::new(6).paginate("hh".to_string(), &["aaaa", "b"]);
        assert_eq!(chunks, vec!["hhaaaa", "b"]);
    }

    #[test]
    fn oversized_fragment_is_kept_whole() {
        let chunks = Paginator::new(5).paginate("hh".to_string(), &["0123456789", "x"]);
        assert_eq!(chunks, vec!["hh", "0123456789", "x"]);
    }

    #[test]
    fn oversized_header_still_leads_first_chunk() {
        let chunks = Paginator::new(3).paginate("header".to_string(), &["ab"]);
        assert_eq!(chunks, vec!["header", "ab"]);
    }

    #[test]
    fn empty_fragment_never_opens_a_new_chunk() {
        let chunks = Paginator::new(2).paginate("hh".to_string(), &[""]);
        assert_eq!(chunks, vec!["hh"]);
    }

    #[test]
    fn length_counts_utf16_code_units() {
        assert_eq!(Paginator::length("ü→✓"), 3);
        assert_eq!(Paginator::length("😀"), 2);
        let chunks = Paginator::new(4).paginate("éé".to_string(), &["üü", "x"]);
        assert_eq!(chunks, vec!["ééüü", "x"]);
    }

    #[test]
    fn surrogate_pairs_push_fragment_into_next_chunk() {
        let chunks = Paginator::new(4).paginate("h".to_string(), &["😀😀"]);
        assert_eq!(chunks, vec!["h", "😀😀"]);
    }
}

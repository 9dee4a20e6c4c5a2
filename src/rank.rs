use std::{cmp::Reverse, collections::BinaryHeap};

use crate::scan::FileSize;

/// The `n` largest files, largest first.
///
/// Keeps a min-heap of at most `n` entries, so the full candidate list is
/// never sorted.
pub fn top_n(files: impl IntoIterator<Item = FileSize>, n: usize) -> Vec<FileSize> {
    if n == 0 {
        return Vec::new();
    }

    let mut heap = BinaryHeap::with_capacity(n.min(1024));
    for file in files {
        if heap.len() < n {
            heap.push(Reverse(file));
        } else if let Some(mut smallest) = heap.peek_mut() {
            if file > smallest.0 {
                *smallest = Reverse(file);
            }
        }
    }

    // Ascending order of `Reverse` is descending order of size.
    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse(file)| file)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::top_n;
    use crate::scan::FileSize;

    fn file(size: u64, path: &str) -> FileSize {
        FileSize {
            size,
            path: PathBuf::from(path),
        }
    }

    fn sizes(files: &[FileSize]) -> Vec<u64> {
        files.iter().map(|f| f.size).collect()
    }

    #[test]
    fn largest_first() {
        let files = vec![file(5, "e"), file(50, "b"), file(1, "a"), file(20, "c")];
        assert_eq!(sizes(&top_n(files, 3)), [50, 20, 5]);
    }

    #[test]
    fn fewer_files_than_requested() {
        let files = vec![file(1, "a"), file(2, "b")];
        assert_eq!(sizes(&top_n(files, 20)), [2, 1]);
    }

    #[test]
    fn zero_requested() {
        assert!(top_n(vec![file(1, "a")], 0).is_empty());
        assert!(top_n(Vec::new(), 20).is_empty());
    }

    #[test]
    fn ties_are_broken_by_path() {
        let files = vec![file(10, "a"), file(10, "c"), file(10, "b"), file(3, "z")];
        let top = top_n(files, 2);
        assert_eq!(top, [file(10, "c"), file(10, "b")]);
    }

    #[test]
    fn ties_compare_paths_as_strings() {
        let files = vec![file(10, "a-b"), file(10, "a/b")];
        assert_eq!(top_n(files, 1), [file(10, "a/b")]);
    }

    #[test]
    fn matches_full_sort() {
        let files: Vec<_> = (0..200u64)
            .map(|i| file((i * 7919) % 101, &format!("f{i}")))
            .collect();

        let mut expected = files.clone();
        expected.sort_by(|a, b| b.cmp(a));
        expected.truncate(20);

        assert_eq!(top_n(files, 20), expected);
    }
}

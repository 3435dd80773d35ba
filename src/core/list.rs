//! The directory lister — enumerate one level, filter, partition, sort,
//! pick a layout, render, and recurse on request.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use tracing::{debug, warn};

use super::classify::{CategoryTable, FileCategory};
use super::entry::EntryInfo;
use super::size::dir_total_size;
use crate::term::{Pager, TermInfo};
use crate::ui::{detail, grid};

/// Behaviour flags parsed from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    pub recursive: bool,
    pub show_totals: bool,
    pub force_list: bool,
    pub force_wide: bool,
}

/// Running counters threaded through the whole recursive call tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub files: usize,
    pub dirs: usize,
    pub bytes: u64,
}

/// An admitted entry together with its category, computed once per pass.
#[derive(Debug, Clone)]
pub struct ListedEntry {
    pub entry: EntryInfo,
    pub category: FileCategory,
}

pub struct Lister<'a> {
    options: ListOptions,
    pattern: &'a Pattern,
    table: &'a CategoryTable,
    term: TermInfo,
}

impl<'a> Lister<'a> {
    pub fn new(
        options: ListOptions,
        pattern: &'a Pattern,
        table: &'a CategoryTable,
        term: TermInfo,
    ) -> Self {
        Self {
            options,
            pattern,
            table,
            term,
        }
    }

    /// List one directory level, then recurse into each subdirectory (in
    /// sorted order) when `--recursive` is set.
    ///
    /// Failures below the top level are logged and skipped; only the initial
    /// directory propagates an error.
    pub fn list(&self, path: &Path, totals: &mut Totals, pager: &mut Pager) -> Result<()> {
        let (entries, subdirs) = self.scan_level(path, totals)?;

        let show_total = self.options.show_totals && !self.options.recursive;

        if self.use_wide_layout(entries.len()) {
            for line in grid::render_grid(&entries, self.term.cols) {
                println!("{line}");
                pager.advance(1)?;
            }
        } else {
            for item in &entries {
                println!("{}", detail::render_detail(item, show_total));
                pager.advance(1)?;
            }
        }

        if self.options.recursive {
            for sub in subdirs {
                println!("\n{}:", sub.display());
                pager.advance(2)?;
                if let Err(err) = self.list(&sub, totals, pager) {
                    warn!(path = %sub.display(), error = %err, "skipping unreadable directory");
                }
            }
        }

        Ok(())
    }

    /// Layout decision for one level.  `--wide` beats `--list` when both are
    /// given; `--list` only overrides the screen-overflow heuristic.
    fn use_wide_layout(&self, entry_count: usize) -> bool {
        let overflow = entry_count > (self.term.rows as usize).saturating_sub(3);
        self.options.force_wide || (!self.options.force_list && overflow)
    }

    /// Enumerate the immediate children of `path`, apply the pattern filter,
    /// and return the sorted entries (directories first) plus the
    /// subdirectory paths for recursion.
    fn scan_level(
        &self,
        path: &Path,
        totals: &mut Totals,
    ) -> Result<(Vec<ListedEntry>, Vec<PathBuf>)> {
        let reader = fs::read_dir(path)
            .with_context(|| format!("cannot read directory {}", path.display()))?;

        let mut dirs: Vec<ListedEntry> = Vec::new();
        let mut files: Vec<ListedEntry> = Vec::new();

        for dirent in reader {
            let dirent = match dirent {
                Ok(d) => d,
                Err(err) => {
                    debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            let child = dirent.path();
            let mut info = match EntryInfo::from_path(&child) {
                Ok(info) => info,
                Err(err) => {
                    debug!(path = %child.display(), error = %err, "skipping entry without metadata");
                    continue;
                }
            };

            if !self.pattern.matches(&info.name) {
                continue;
            }

            if info.is_dir {
                totals.dirs += 1;
                if self.options.show_totals && !self.options.recursive {
                    // One walk per directory; the same number feeds both the
                    // display column and the running total.
                    let total = dir_total_size(&child);
                    info.dir_total = Some(total);
                    totals.bytes = totals.bytes.saturating_add(total);
                }
                dirs.push(ListedEntry {
                    entry: info,
                    category: FileCategory::Other,
                });
            } else {
                totals.files += 1;
                totals.bytes = totals.bytes.saturating_add(info.size);
                let category = self.table.classify(&info);
                files.push(ListedEntry {
                    entry: info,
                    category,
                });
            }
        }

        dirs.sort_by_key(|item| item.entry.name.to_lowercase());
        files.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.entry.name.to_lowercase().cmp(&b.entry.name.to_lowercase()))
        });

        let subdirs = dirs.iter().map(|item| item.entry.path.clone()).collect();
        let mut entries = dirs;
        entries.append(&mut files);
        Ok((entries, subdirs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn write_file(path: &Path, len: usize) {
        File::create(path).unwrap().write_all(&vec![0u8; len]).unwrap();
    }

    fn lister<'a>(
        options: ListOptions,
        pattern: &'a Pattern,
        table: &'a CategoryTable,
    ) -> Lister<'a> {
        let term = TermInfo { cols: 80, rows: 24 };
        Lister::new(options, pattern, table, term)
    }

    #[test]
    fn dirs_precede_files_and_files_group_by_category() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir.path().join("zz.cpp"), 10);
        write_file(&dir.path().join("aa.txt"), 10);
        write_file(&dir.path().join("movie.mkv"), 10);
        std::fs::create_dir(dir.path().join("zebra")).unwrap();
        std::fs::create_dir(dir.path().join("Apple")).unwrap();

        let pattern = Pattern::new("*").unwrap();
        let table = CategoryTable::default();
        let l = lister(ListOptions::default(), &pattern, &table);
        let mut totals = Totals::default();
        let (entries, subdirs) = l.scan_level(dir.path(), &mut totals).unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.entry.name.as_str()).collect();
        // Dirs first (case-insensitive), then Programming < Text < Video.
        assert_eq!(names, ["Apple", "zebra", "zz.cpp", "aa.txt", "movie.mkv"]);
        assert_eq!(subdirs.len(), 2);
        assert!(subdirs[0].ends_with("Apple"));
    }

    #[test]
    fn pattern_filters_files_and_directories_alike() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir.path().join("keep.txt"), 5);
        write_file(&dir.path().join("drop.log"), 5);
        std::fs::create_dir(dir.path().join("drop_dir")).unwrap();

        let pattern = Pattern::new("*.txt").unwrap();
        let table = CategoryTable::default();
        let l = lister(ListOptions::default(), &pattern, &table);
        let mut totals = Totals::default();
        let (entries, subdirs) = l.scan_level(dir.path(), &mut totals).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entry.name, "keep.txt");
        assert!(subdirs.is_empty());
        assert_eq!(totals, Totals { files: 1, dirs: 0, bytes: 5 });
    }

    #[test]
    fn bracket_classes_match() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir.path().join("x1"), 1);
        write_file(&dir.path().join("y2"), 1);

        let pattern = Pattern::new("*[x]*").unwrap();
        let table = CategoryTable::default();
        let l = lister(ListOptions::default(), &pattern, &table);
        let mut totals = Totals::default();
        let (entries, _) = l.scan_level(dir.path(), &mut totals).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entry.name, "x1");
    }

    #[test]
    fn counters_accumulate_sizes() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir.path().join("a.cpp"), 1000);
        write_file(&dir.path().join("b.txt"), 2048);
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let pattern = Pattern::new("*").unwrap();
        let table = CategoryTable::default();
        let l = lister(ListOptions::default(), &pattern, &table);
        let mut totals = Totals::default();
        let (entries, _) = l.scan_level(dir.path(), &mut totals).unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.entry.name.as_str()).collect();
        assert_eq!(names, ["sub", "a.cpp", "b.txt"]);
        assert_eq!(totals, Totals { files: 2, dirs: 1, bytes: 3048 });
    }

    #[test]
    fn totals_include_directory_sizes_when_not_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        write_file(&sub.join("inner"), 500);

        let options = ListOptions {
            show_totals: true,
            ..Default::default()
        };
        let pattern = Pattern::new("*").unwrap();
        let table = CategoryTable::default();
        let l = lister(options, &pattern, &table);
        let mut totals = Totals::default();
        let (entries, _) = l.scan_level(dir.path(), &mut totals).unwrap();

        assert_eq!(entries[0].entry.dir_total, Some(500));
        assert_eq!(totals.bytes, 500);
    }

    #[test]
    fn recursive_suppresses_directory_totals() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        write_file(&sub.join("inner"), 500);

        let options = ListOptions {
            show_totals: true,
            recursive: true,
            ..Default::default()
        };
        let pattern = Pattern::new("*").unwrap();
        let table = CategoryTable::default();
        let l = lister(options, &pattern, &table);
        let mut totals = Totals::default();
        let (entries, _) = l.scan_level(dir.path(), &mut totals).unwrap();

        // No per-directory walk at this level; the recursion itself will
        // count `inner` exactly once.
        assert_eq!(entries[0].entry.dir_total, None);
        assert_eq!(totals.bytes, 0);
    }

    #[test]
    fn wide_beats_list_when_both_are_forced() {
        let pattern = Pattern::new("*").unwrap();
        let table = CategoryTable::default();
        let options = ListOptions {
            force_list: true,
            force_wide: true,
            ..Default::default()
        };
        let l = lister(options, &pattern, &table);
        assert!(l.use_wide_layout(1));
    }

    #[test]
    fn list_overrides_only_the_overflow_heuristic() {
        let pattern = Pattern::new("*").unwrap();
        let table = CategoryTable::default();

        let l = lister(ListOptions::default(), &pattern, &table);
        // rows = 24 → detailed up to 21 entries, wide past that.
        assert!(!l.use_wide_layout(21));
        assert!(l.use_wide_layout(22));

        let forced = ListOptions {
            force_list: true,
            ..Default::default()
        };
        let l = lister(forced, &pattern, &table);
        assert!(!l.use_wide_layout(500));
    }

    #[test]
    fn recursion_counts_the_whole_tree() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir.path().join("a.txt"), 10);
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        write_file(&sub.join("b.txt"), 20);
        let inner = sub.join("inner");
        std::fs::create_dir(&inner).unwrap();
        write_file(&inner.join("c.txt"), 30);

        let options = ListOptions {
            recursive: true,
            ..Default::default()
        };
        let pattern = Pattern::new("*").unwrap();
        let table = CategoryTable::default();
        let l = lister(options, &pattern, &table);
        let mut totals = Totals::default();
        let mut pager = Pager::new(false, 24);
        l.list(dir.path(), &mut totals, &mut pager).unwrap();

        assert_eq!(totals, Totals { files: 3, dirs: 2, bytes: 60 });
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectory_is_skipped_during_recursion() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        let open = dir.path().join("open");
        std::fs::create_dir(&locked).unwrap();
        std::fs::create_dir(&open).unwrap();
        write_file(&open.join("inner.txt"), 7);
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        let options = ListOptions {
            recursive: true,
            ..Default::default()
        };
        let pattern = Pattern::new("*").unwrap();
        let table = CategoryTable::default();
        let l = lister(options, &pattern, &table);
        let mut totals = Totals::default();
        let mut pager = Pager::new(false, 24);
        let result = l.list(dir.path(), &mut totals, &mut pager);

        // Restore so tempdir cleanup can remove the directory.
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        // The locked subtree is absent from the counts, not a crash.
        assert!(result.is_ok());
        assert_eq!(totals, Totals { files: 1, dirs: 2, bytes: 7 });
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("gone");

        let pattern = Pattern::new("*").unwrap();
        let table = CategoryTable::default();
        let l = lister(ListOptions::default(), &pattern, &table);
        let mut totals = Totals::default();
        assert!(l.scan_level(&gone, &mut totals).is_err());
    }
}

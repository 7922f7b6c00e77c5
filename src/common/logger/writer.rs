use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use parking_lot::Mutex;

/// Removes ANSI colour sequences so the log file stays plain text.
pub fn strip_ansi_escapes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (_, '\x1b') => in_escape = true,
            (true, c) if c.is_ascii_alphabetic() => in_escape = false,
            (true, _) => {}
            (false, c) => result.push(c),
        }
    }
    result
}

/// Append-only log file that keeps at most `max_lines` lines.
///
/// Pruning is amortised: the file is only rewritten once enough new lines
/// have been appended since the last prune.
#[derive(Clone)]
pub struct RollingLogFile {
    path: PathBuf,
    max_lines: u32,
    pending: Arc<Mutex<u32>>,
}

impl RollingLogFile {
    pub fn new(path: impl Into<PathBuf>, max_lines: u32) -> Self {
        Self {
            path: path.into(),
            max_lines: max_lines.max(1),
            pending: Arc::new(Mutex::new(0)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn prune_threshold(&self) -> u32 {
        (self.max_lines / 10).clamp(1, 50)
    }

    fn prune(&self) -> io::Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let lines = BufReader::new(File::open(&self.path)?)
            .lines()
            .collect::<io::Result<Vec<_>>>()?;

        let keep = self.max_lines as usize;
        if lines.len() <= keep {
            return Ok(());
        }

        let mut file = File::create(&self.path)?;
        for line in &lines[lines.len() - keep..] {
            writeln!(file, "{line}")?;
        }
        Ok(())
    }
}

impl io::Write for RollingLogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Appends and prunes run under the same lock.
        let mut pending = self.pending.lock();

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?
            .write_all(buf)?;

        *pending += buf.iter().filter(|&&b| b == b'\n').count() as u32;

        if *pending >= self.prune_threshold() {
            if let Err(e) = self.prune() {
                eprintln!("Failed to prune log file {}: {}", self.path.display(), e);
            }
            *pending = 0;
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for RollingLogFile {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("mediaview-log-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn strips_colour_sequences() {
        assert_eq!(strip_ansi_escapes("\x1b[32mINFO\x1b[0m ready"), "INFO ready");
        assert_eq!(strip_ansi_escapes("plain"), "plain");
    }

    #[test]
    fn keeps_only_the_newest_lines() {
        let path = scratch_path("rolling.log");
        let _ = fs::remove_file(&path);

        let mut log = RollingLogFile::new(&path, 5);
        for i in 0..12 {
            writeln!(log, "line {i}").unwrap();
        }

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines.last(), Some(&"line 11"));
        assert_eq!(lines.first(), Some(&"line 7"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn concurrent_writers_keep_whole_ordered_lines() {
        let path = scratch_path("concurrent.log");
        let _ = fs::remove_file(&path);

        let log = RollingLogFile::new(&path, 20);
        let threads: Vec<_> = (0..4)
            .map(|t| {
                let mut log = log.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        log.write_all(format!("t{t} line {i}\n").as_bytes()).unwrap();
                    }
                })
            })
            .collect();
        for thread in threads {
            thread.join().unwrap();
        }

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert!(!lines.is_empty());
        assert!(lines.len() <= 20 + log.prune_threshold() as usize, "{}", lines.len());

        let mut last_seen = [None::<u32>; 4];
        for line in lines {
            let (thread, index) = line
                .strip_prefix('t')
                .and_then(|rest| rest.split_once(" line "))
                .unwrap_or_else(|| panic!("malformed line {line:?}"));
            let thread: usize = thread.parse().unwrap();
            let index: u32 = index.parse().unwrap();
            assert!(last_seen[thread].is_none_or(|prev| prev < index), "{line:?}");
            last_seen[thread] = Some(index);
        }

        let _ = fs::remove_file(&path);
    }
}

//! Console report
//!
//! Line-oriented progress for a gather run. Info lines go to `out`,
//! warnings to `err`. The wording is stable; scripts grep for it.

use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};
use std::path::Path;

pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Reporter<Stdout, Stderr> {
    /// Report to the process stdout / stderr
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    pub fn info(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.out, "[INFO] {}", msg)
    }

    pub fn warn(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.err, "[WARN] {}", msg)
    }

    pub fn task_start(&mut self, task: &str, fields: &[String]) -> io::Result<()> {
        self.info(format_args!("Task <{}> files: <{}>", task, fields.join(" ")))
    }

    pub fn task_not_found(&mut self, task: &str) -> io::Result<()> {
        self.warn(format_args!("No task found for <{}> ... skipping", task))
    }

    pub fn shards_done(&mut self, done: usize, total: usize) -> io::Result<()> {
        self.info(format_args!("Found {} of {} tasks DONE", done, total))
    }

    pub fn file_not_found(&mut self, path: &Path) -> io::Result<()> {
        self.info(format_args!("File <{}> not found ... skipping", path.display()))
    }

    pub fn copy(&mut self, src: &Path, dest_dir: &Path) -> io::Result<()> {
        self.info(format_args!("Copy {} to {}", src.display(), dest_dir.display()))
    }

    pub fn done(&mut self) -> io::Result<()> {
        self.info("Done")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn info_and_warn_go_to_separate_streams() {
        let mut reporter = Reporter::new(Vec::new(), Vec::new());
        reporter
            .task_start("test.task2", &["file2".to_string(), "file3".to_string()])
            .unwrap();
        reporter.task_not_found("test.missing_task").unwrap();
        reporter.shards_done(2, 3).unwrap();
        reporter.done().unwrap();

        let (out, err) = reporter.into_inner();
        assert_eq!(
            lines(out),
            "[INFO] Task <test.task2> files: <file2 file3>\n\
             [INFO] Found 2 of 3 tasks DONE\n\
             [INFO] Done\n"
        );
        assert_eq!(
            lines(err),
            "[WARN] No task found for <test.missing_task> ... skipping\n"
        );
    }

    #[test]
    fn file_lines() {
        let mut reporter = Reporter::new(Vec::new(), Vec::new());
        reporter.file_not_found(Path::new("/runs/gone.bam")).unwrap();
        reporter
            .copy(Path::new("/runs/a.hic"), Path::new("/out/add_norm"))
            .unwrap();

        let (out, _) = reporter.into_inner();
        assert_eq!(
            lines(out),
            "[INFO] File </runs/gone.bam> not found ... skipping\n\
             [INFO] Copy /runs/a.hic to /out/add_norm\n"
        );
    }
}

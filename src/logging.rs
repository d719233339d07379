use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// 1回の実行分のログ。stderr と `<dir>/<prefix>_<YYYYmmdd_HHMMSS>.log` に同じ行を書く
pub struct RunLog {
    file: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl RunLog {
    pub fn create<P: AsRef<Path>>(dir: P, prefix: &str) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log dir: {}", dir.display()))?;
        let started = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let path = dir.join(format!("{}_{}.log", prefix, started));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create log file: {}", path.display()))?;
        Ok(Self {
            file: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルへの書き込み失敗は処理を止めない
    pub fn line(&self, message: &str) {
        eprintln!("{}", message);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", message).and_then(|_| file.flush());
        }
    }
}

/// `log!(run_log, "...", args)` で stderr とログファイルに1行書く
#[macro_export]
macro_rules! log {
    ($run_log:expr, $($arg:tt)*) => {
        $run_log.line(&format!($($arg)*))
    };
}

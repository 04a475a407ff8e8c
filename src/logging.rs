use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// グローバルな詳細ログフラグ
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// ログの書き込み先（未初期化なら捨てる）
static SINK: Mutex<Option<BufWriter<File>>> = Mutex::new(None);

/// ログファイルを初期化する。既存の内容は破棄される。
pub fn init_log_file(path: &str) -> std::io::Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    let mut sink = SINK.lock().unwrap();
    *sink = Some(writer);
    Ok(())
}

/// 1行書き込んで即フラッシュする
pub fn write_log(message: &str) {
    if let Ok(mut sink) = SINK.lock() {
        if let Some(ref mut writer) = *sink {
            let _ = writeln!(writer, "{}", message);
            let _ = writer.flush();
        }
    }
}

/// 詳細ログの有効/無効を切り替える
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

/// 詳細ログが有効かチェック
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// 詳細ログ出力マクロ（ファイル出力）
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            $crate::logging::write_log(&format!($($arg)*));
        }
    };
}

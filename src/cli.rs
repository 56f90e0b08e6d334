use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ruwords - 从网页/JS 资产提取文件名风格词条的高速词表收集工具",
    long_about = "NAME:\n  ruwords - 从网页/JS 资产提取文件名风格词条的高速词表收集工具\n\nUSAGE:\n  ruwords <SUBCOMMAND> [OPTIONS]\n\nCOMMANDS:\n  url (u)   抓取单个 URL 并提取词条\n  list (l)  并发抓取 URL 列表文件中的所有 URL，合并去重\n  file (f)  解析本地文本文件\n  ext (x)   查看当前生效的扩展名字典\n\n说明:\n  - 词条 = 连字符连接的单词，可带一个已知文件扩展名 (如 admin-panel.php)。\n  - --all 额外输出所有裸词与 word.ext 组合，适合生成更大的字典。\n  - 单个源失败只记录告警，不影响其余源与整体退出码。\n\n快速示例:\n  ruwords url https://example.com/app.js -o words.txt\n  ruwords list urls.txt -t 20 -d 0.5 -H 'Cookie: session=xxx'\n  ruwords file bundle.js --all --filter-extensions js json",
    after_help = "通用参数 (url/list/file)：\n  -t, --threads <N>              并发数，须 >= 1 (默认 10，仅 list 模式生效)\n  -d, --delay <SEC>              每次请求前延迟秒数 (默认 0)\n  -H, --headers <'Name: value'>  自定义 HTTP 头(可重复)；格式错误的条目跳过\n      --timeout <SEC>            HTTP 超时 (默认 30)\n      --filter-extensions <EXT>  仅保留指定扩展名 (pdf 与 .pdf 均可)\n      --exclude-extensions <EXT> 排除指定扩展名\n  -a, --all                      同时输出裸词与 word.ext 组合\n  -o, --output <PATH>            输出文件；.gz 后缀自动启用 gzip\n      --output-type, --oy <FMT>  输出类型: txt/json/jsonl (默认 txt)\n      --gzip                     强制 gzip 压缩\n      --append                   追加写入输出文件（默认覆盖）\n      --not-print, --np          不在终端打印结果\n      --silent                   静默，仅输出词表\n      --no-progress              关闭屏幕进度 (list 模式)\n      --progress-interval <SEC>  进度刷新间隔 (默认 1)\n      --log-level <LEVEL>        日志级别: error|warn|info|debug|silent (默认 info)\n\n示例：\n  ruwords list urls.txt -t 50 -o words.txt.gz --oy txt\n  ruwords url https://example.com -a --exclude-extensions png jpg gif\n  ruwords ext --filter-extensions php js\n"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 单 URL 模式 (url) - 抓取一个页面/脚本并提取词条
    #[command(alias = "u")]
    Url(UrlArgs),
    /// 列表模式 (list) - 并发抓取 URL 列表，按集合并去重聚合
    #[command(alias = "l", after_help = "列表文件格式: 每行一个绝对 http(s) URL；空行与 # 注释跳过；非法条目告警后跳过。")]
    List(ListArgs),
    /// 本地文件模式 (file) - 直接解析本地文本内容
    #[command(alias = "f")]
    File(FileArgs),
    /// 扩展名字典 (ext) - 打印过滤后生效的扩展名列表
    #[command(alias = "x")]
    Ext(ExtArgs),
}

/// Common args reused by the harvesting subcommands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// 并发数 (仅 list 模式生效)
    #[arg(short = 't', long = "threads", default_value_t = 10)]
    pub threads: usize,

    /// 每次 HTTP 请求前的延迟(秒)
    #[arg(short = 'd', long = "delay", default_value_t = 0.0)]
    pub delay: f64,

    /// 自定义 HTTP 头，格式 'Name: value'，可重复
    #[arg(short = 'H', long = "headers")]
    pub headers: Vec<String>,

    /// HTTP 超时(秒)
    #[arg(long = "timeout", default_value_t = 30)]
    pub timeout: u64,

    /// 仅保留指定扩展名 (可重复；pdf 与 .pdf 均可)
    #[arg(long = "filter-extensions", num_args = 1..)]
    pub filter_extensions: Vec<String>,

    /// 排除指定扩展名 (可重复)
    #[arg(long = "exclude-extensions", num_args = 1..)]
    pub exclude_extensions: Vec<String>,

    /// 同时输出所有裸词与 word.ext 组合
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// 输出文件路径；.gz 后缀自动启用 gzip
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// 输出类型: txt/json/jsonl
    #[arg(long = "output-type", alias = "oy", default_value = "txt")]
    pub output_type: String,

    /// 使用 gzip 压缩 (文件名以 .gz 结尾自动开启)
    #[arg(long = "gzip")]
    pub gzip: bool,

    /// 追加写入输出文件（默认覆盖写入）
    #[arg(long = "append")]
    pub append: bool,

    /// 不在屏幕打印
    #[arg(long = "not-print", alias = "np")]
    pub not_print: bool,

    /// 静默模式
    #[arg(long = "silent")]
    pub silent: bool,

    /// 关闭屏幕进度
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// 进度刷新间隔(秒)
    #[arg(long = "progress-interval", default_value_t = 1)]
    pub progress_interval: u64,

    /// 日志级别: error|warn|info|debug|silent
    #[arg(long = "log-level", default_value = "info", value_parser = ["error", "warn", "info", "debug", "silent"])]
    pub log_level: String,
}

#[derive(Args, Debug)]
pub struct UrlArgs {
    /// 目标 URL
    #[arg(value_name = "URL")]
    pub url: String,

    /// 基本通用参数
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// URL 列表文件路径（每行一个 URL）
    #[arg(value_name = "PATH")]
    pub listfile: PathBuf,

    /// 基本通用参数
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct FileArgs {
    /// 待解析的本地文本文件
    #[arg(value_name = "PATH")]
    pub file: PathBuf,

    /// 基本通用参数
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct ExtArgs {
    /// 仅保留指定扩展名
    #[arg(long = "filter-extensions", num_args = 1..)]
    pub filter_extensions: Vec<String>,

    /// 排除指定扩展名
    #[arg(long = "exclude-extensions", num_args = 1..)]
    pub exclude_extensions: Vec<String>,
}

use clap::Parser;

use stegmark::{
    cli::{Cli, Commands},
    handler::{handle_capacity, handle_decode, handle_encode, handle_verify},
};

/// 程序的主入口点
///
/// 初始化日志后解析命令行参数，并根据子命令将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 日志级别由 RUST_LOG 控制，默认只输出警告
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(args) => handle_encode(args).map(|_| ()),
        Commands::Decode(args) => handle_decode(args).map(|_| ()),
        Commands::Verify(args) => handle_verify(args).map(|_| ()),
        Commands::Capacity(args) => handle_capacity(args).map(|_| ()),
    }
}

//! SimpleC CLI - the SimpleC front-end command line interface.
//! SimpleC CLI - SimpleC 前端的命令行界面。

mod commands;

use clap::{Parser, Subcommand};

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "simplec")]
#[command(
    author,
    version,
    about = "SimpleC - compiler front-end for a small C-like teaching language",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress non-diagnostic output. / 抑制非诊断输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Print the token stream of a file. / 打印文件的 token 流。
    Tokens {
        /// The file to tokenize. / 要进行词法分析的文件。
        file: String,
    },

    /// Print the AST of a file. / 打印文件的抽象语法树。
    Ast {
        /// The file to parse. / 要解析的文件。
        file: String,
    },

    /// Run the full front-end and report diagnostics. / 运行完整前端并报告诊断。
    Check {
        /// The file to check. / 要检查的文件。
        file: String,

        /// Emit the token stream and diagnostics as JSON. / 以 JSON 输出 token 流和诊断。
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tokens { file } => commands::tokens::run(&file),
        Commands::Ast { file } => commands::ast::run(&file),
        Commands::Check { file, json } => commands::check::run(&file, json, cli.quiet),
    };

    if let Err(message) = result {
        eprintln!("simplec: {}", message);
        std::process::exit(1);
    }
}

//! cutplan - 成衣裁剪用布計算命令列工具

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cutplan_calc::{CalculationMode, CalculatorSession};
use cutplan_core::{CalculatorKind, Size, Variant};

mod render;

/// 成衣裁剪用布計算（男裝上衣、T 恤、拉鍊外套）
#[derive(Parser, Debug)]
#[command(name = "cutplan")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// 以 JSON 輸出結果
    #[arg(long, global = true)]
    json: bool,

    /// 顯示除錯日誌
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 可用布長 → 各尺碼可裁件數、剩餘與效率
    Allocate {
        #[command(flatten)]
        target: Target,

        /// 可用布長（cm）
        #[arg(short, long, allow_hyphen_values = true)]
        fabric: String,

        /// 勾選尺碼，逗號分隔（例如 M,L,2XL）
        #[arg(long, value_delimiter = ',')]
        sizes: Vec<Size>,
    },

    /// 各尺碼需求數量 → 所需主布與副料
    Require {
        #[command(flatten)]
        target: Target,

        /// 尺碼數量，可重複（例如 -q M=3 -q L=2）
        #[arg(short, long = "qty", value_parser = parse_quantity, allow_hyphen_values = true)]
        quantities: Vec<(Size, String)>,
    },

    /// 顯示用量表、尺寸表與注意事項
    Info {
        #[command(flatten)]
        target: Target,
    },
}

#[derive(clap::Args, Debug)]
struct Target {
    /// 計算器：mens-top、tshirt、zipper-top
    #[arg(short, long)]
    calculator: CalculatorKind,

    /// 款式：crew/hoodie、short/long 或拉鍊外套布種
    #[arg(short, long)]
    style: Option<String>,
}

impl Target {
    fn variant(&self) -> Result<Variant> {
        match &self.style {
            Some(style) => Variant::parse(self.calculator, style)
                .with_context(|| format!("無法套用款式 {}", style)),
            None => Ok(self.calculator.default_variant()),
        }
    }
}

/// 解析 `SIZE=QTY`；數量保留原始字串，由工作階段正規化
fn parse_quantity(raw: &str) -> std::result::Result<(Size, String), String> {
    let (size, qty) = raw
        .split_once('=')
        .ok_or_else(|| format!("格式應為 SIZE=QTY: {}", raw))?;
    let size = size.parse::<Size>().map_err(|e| e.to_string())?;
    Ok((size, qty.to_string()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match &args.command {
        Command::Allocate {
            target,
            fabric,
            sizes,
        } => {
            let mut session = open_session(target)?;
            session.set_mode(CalculationMode::AvailableFabric);
            session.set_fabric_length(fabric);
            for &size in sizes {
                session.set_size_selected(size, true);
            }
            emit(&session, args.json)?;
        }
        Command::Require { target, quantities } => {
            let mut session = open_session(target)?;
            session.set_mode(CalculationMode::RequiredFabric);
            for (size, qty) in quantities {
                session.set_quantity(*size, qty);
            }
            emit(&session, args.json)?;
        }
        Command::Info { target } => {
            let variant = target.variant()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&render::InfoReport::new(variant))?);
            } else {
                print!("{}", render::info(variant));
            }
        }
    }

    Ok(())
}

fn open_session(target: &Target) -> Result<CalculatorSession> {
    let variant = target.variant()?;
    info!("開啟計算器 {}（{}）", variant.kind(), variant);
    Ok(CalculatorSession::with_variant(variant))
}

fn emit(session: &CalculatorSession, json: bool) -> Result<()> {
    if json {
        let report = render::SessionReport::new(session);
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("無法序列化計算結果")?
        );
    } else {
        print!("{}", render::session(session));
    }
    Ok(())
}

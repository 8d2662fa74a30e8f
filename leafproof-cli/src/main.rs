// File: leafproof-cli/src/main.rs
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use leafproof_hash::Digest;
use leafproof_merkle::{verify, Proof, Side, Tree};
use leafproof_spec::{self as spec, Batch};
use log::{debug, info};
use std::{fs, path::{Path, PathBuf}, process::ExitCode};

#[derive(Parser)]
#[command(name="leafproof", version, about="Merkle inclusion proofs over record batches")]
struct Cli {
    /// Log filter when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    cmd: Cmd
}
#[derive(Subcommand)]
enum Cmd {
    /// Build the sample address batch, print the tree, prove and verify the first address
    Demo,
    /// Print the root of a batch
    Root {
        #[arg(long)]
        batch: PathBuf,
    },
    /// Print every level of a batch's tree
    Tree {
        #[arg(long)]
        batch: PathBuf,
    },
    /// Write an inclusion proof for one record
    Prove {
        #[arg(long)]
        batch: PathBuf,
        /// Record to prove (first matching leaf)
        #[arg(long, conflicts_with = "index", required_unless_present = "index")]
        record: Option<String>,
        /// Leaf position to prove, for duplicated records
        #[arg(long)]
        index: Option<usize>,
        #[arg(long, default_value = "proof.bin")]
        out: PathBuf,
    },
    /// Check a proof against a root
    Verify {
        #[arg(long)]
        record: String,
        #[arg(long, default_value = "proof.bin")]
        proof: PathBuf,
        /// Root digest as hex
        #[arg(long)]
        root: String,
    },
}

fn init_logging(max_level: &str) {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(max_level));
}

fn load_batch(path: &Path) -> Result<Batch> {
    let txt = fs::read_to_string(path).with_context(|| format!("read batch {}", path.display()))?;
    spec::load_batch_toml(&txt).with_context(|| format!("parse batch {}", path.display()))
}

fn build_tree(batch: &Batch) -> Result<Tree> {
    match Tree::build_with(&batch.records, &batch.build_options()) {
        Some(tree) => {
            info!("built tree: {} leaves, height {}", tree.leaf_count(), tree.height());
            Ok(tree)
        }
        None => bail!("batch has no records"),
    }
}

fn print_levels(tree: &Tree) {
    for (i, level) in tree.levels().iter().enumerate() {
        let hexes: Vec<String> = level.iter().map(Digest::to_hex).collect();
        println!("Level {}: [{}]", i, hexes.join(", "));
    }
}

fn print_proof(proof: &Proof) {
    for step in proof.steps() {
        let tag = match step.side { Side::Left => 'L', Side::Right => 'R' };
        println!("{}:{}", tag, step.digest);
    }
}

fn run(cmd: Cmd) -> Result<ExitCode> {
    match cmd {
        Cmd::Demo => {
            let batch = Batch::demo();
            let tree = build_tree(&batch)?;
            println!("Merkle Tree Structure:");
            print_levels(&tree);
            let first = &batch.records[0];
            let proof = tree.prove_inclusion(first)?;
            println!("\nProof for first address:");
            print_proof(&proof);
            let ok = verify(first, &proof, &tree.root());
            println!("\nVerification Result: {}", ok);
        }
        Cmd::Root { batch } => {
            let tree = build_tree(&load_batch(&batch)?)?;
            println!("{}", tree.root());
        }
        Cmd::Tree { batch } => {
            let tree = build_tree(&load_batch(&batch)?)?;
            print_levels(&tree);
        }
        Cmd::Prove { batch, record, index, out } => {
            let tree = build_tree(&load_batch(&batch)?)?;
            let proof = match (record, index) {
                (_, Some(i)) => tree.prove_index(i)?,
                (Some(r), None) => tree.prove_inclusion(&r)?,
                (None, None) => bail!("either --record or --index is required"),
            };
            let f = fs::File::create(&out).with_context(|| format!("create {}", out.display()))?;
            bincode::serialize_into(f, &proof).context("encode proof")?;
            debug!("proof has {} steps", proof.len());
            print_proof(&proof);
            println!("root={}", tree.root());
            println!("wrote {}", out.display());
        }
        Cmd::Verify { record, proof, root } => {
            let root = Digest::from_hex(&root).context("parse --root")?;
            let f = fs::File::open(&proof).with_context(|| format!("open {}", proof.display()))?;
            let proof: Proof = bincode::deserialize_from(f).context("decode proof")?;
            let ok = verify(&record, &proof, &root);
            println!("{}", if ok { "valid" } else { "invalid" });
            if !ok {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    run(cli.cmd)
}

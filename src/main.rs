use crate::commands::disc::{InfoCommand, SectorCommand, SubQCommand, TocCommand, WatchCommand};
use crate::commands::{Cli, Commands};
use anyhow::Result;
use clap::Parser;
use folder_cdvd::cd::RAW_FRAME_SIZE;
use folder_cdvd::cd::msf::Msf;
use folder_cdvd::cd::sector::ReadMode;
use folder_cdvd::device::CdvdDevice;
use folder_cdvd::device::no_disc::NoDisc;
use folder_cdvd::disc::toc::DVD_STRUCTURE_SIZE;
use folder_cdvd::folder::DirectoryDisc;
use folder_cdvd::folder::watch::{ChangeEvent, PollingNotifier};
use log::{info, warn};
use std::path::Path;
use std::sync::mpsc::Receiver;
use std::thread;
use std::time::Duration;

mod commands;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info(cmd) => print_info(cmd)?,
        Commands::Toc(cmd) => print_toc(cmd)?,
        Commands::Sector(cmd) => print_sector(cmd)?,
        Commands::Subq(cmd) => print_subq(cmd)?,
        Commands::Watch(cmd) => watch(cmd)?,
    }

    Ok(())
}

fn open_folder(dir: &Path) -> Result<(DirectoryDisc, Receiver<ChangeEvent>)> {
    let (notifier, events) = PollingNotifier::channel();
    let mut disc = DirectoryDisc::new(notifier);
    disc.open(dir)?;
    Ok((disc, events))
}

fn print_info(cmd: InfoCommand) -> Result<()> {
    let Some(dir) = &cmd.dir else {
        return print_device(&mut NoDisc);
    };

    let (mut disc, _events) = open_folder(dir)?;
    print_device(&mut disc)?;

    if let Some(session) = disc.session() {
        let pvd = session.pvd();
        println!("Files:        {}", session.image().files.len());
        println!("Sectors:      {}", session.image().block_count());
        println!(
            "System ID:    {}",
            String::from_utf8_lossy(&pvd.system_identifier).trim_end()
        );
        println!(
            "Volume ID:    {}",
            String::from_utf8_lossy(&pvd.volume_identifier).trim_end()
        );
        println!(
            "Volume size:  {:?} blocks of {:?} bytes",
            pvd.volume_space_size.get(),
            pvd.logical_block_size.get()
        );
        println!(
            "Descriptor:   {}",
            if pvd.is_primary() && pvd.is_consistent() {
                "valid"
            } else {
                "malformed"
            }
        );
    }

    Ok(())
}

fn print_device(device: &mut dyn CdvdDevice) -> Result<()> {
    let disk_type = device.get_disk_type();
    let dual = device.get_dual_info()?;

    println!("Disk type:    {disk_type:?} ({:#04x})", disk_type.code());
    println!("Tray:         {:?}", device.get_tray_status());
    println!(
        "Dual layer:   {} (layer 1 at {})",
        dual.dual_type, dual.layer1_start
    );

    match device.get_tn() {
        Ok(range) => println!("Tracks:       {} - {}", range.first, range.last),
        Err(err) => println!("Tracks:       unavailable ({err})"),
    }

    Ok(())
}

fn print_toc(cmd: TocCommand) -> Result<()> {
    let (mut disc, _events) = open_folder(&cmd.dir)?;
    if let Some(media_type) = cmd.media_type {
        disc.set_disk_type(media_type.into())?;
    }

    let mut toc = vec![0u8; DVD_STRUCTURE_SIZE];
    disc.get_toc(&mut toc)?;
    print_hex(&toc);

    Ok(())
}

fn print_sector(cmd: SectorCommand) -> Result<()> {
    let (mut disc, _events) = open_folder(&cmd.dir)?;
    let mode = ReadMode::from(cmd.mode);

    let mut buffer = vec![0u8; RAW_FRAME_SIZE];
    disc.read_sector(&mut buffer, cmd.lsn, mode)?;
    print_hex(&buffer[..mode.payload_size()]);

    Ok(())
}

fn print_subq(cmd: SubQCommand) -> Result<()> {
    let (mut disc, _events) = open_folder(&cmd.dir)?;
    let subq = disc.read_subq(cmd.lsn)?;

    println!("Control/mode: {}/{}", subq.ctrl, subq.mode);
    println!("Track/index:  {:02x}/{:02x}", subq.track_num, subq.track_index);
    println!(
        "Track time:   {:02x}:{:02x}:{:02x}",
        subq.track_m, subq.track_s, subq.track_f
    );
    println!(
        "Disc time:    {:02x}:{:02x}:{:02x}",
        subq.disc_m, subq.disc_s, subq.disc_f
    );

    match Msf::from_bcd([subq.track_m, subq.track_s, subq.track_f]).to_lsn() {
        Some(lsn) => println!("Position:     sector {lsn}"),
        None => println!("Position:     lead-in"),
    }

    Ok(())
}

fn watch(cmd: WatchCommand) -> Result<()> {
    let (mut disc, events) = open_folder(&cmd.dir)?;
    info!("Watching {:?}, press Ctrl+C to stop", cmd.dir);

    loop {
        thread::sleep(Duration::from_millis(cmd.interval_ms));
        disc.notifier_mut().poll()?;

        for event in events.try_iter() {
            match event {
                ChangeEvent::Created(path) => info!("Created: {path:?}"),
                ChangeEvent::Modified(path) => info!("Modified: {path:?}"),
                ChangeEvent::Removed(path) => warn!("Removed: {path:?}"),
            }
        }
    }
}

/// Prints 16 bytes per row, collapsing runs of zero rows into `*`.
fn print_hex(bytes: &[u8]) {
    let mut skipping = false;

    for (row, chunk) in bytes.chunks(16).enumerate() {
        if chunk.iter().all(|&b| b == 0) && row > 0 {
            if !skipping {
                println!("*");
                skipping = true;
            }
            continue;
        }

        skipping = false;
        println!("{:08x}  {}", row * 16, hex::encode(chunk));
    }

    println!("{:08x}", bytes.len());
}

//! Bluetooth Low Energy subsystem.
//!
//! This module drives the Nordic SoftDevice S140 in **Peripheral** role:
//! the device advertises as connectable, accepts a single central, and
//! goes straight back to advertising when the central leaves.
//!
//! The only thing the rest of the firmware sees is the connectivity
//! snapshot: one atomic state word (Off / Advertising / Connected)
//! written by the advertiser task and read, non-blocking, by the
//! indicator loop via [`current_state`].

use core::mem;
use core::sync::atomic::{AtomicU8, Ordering};

use defmt::{info, warn};
use embassy_executor::Spawner;
use heapless::{String, Vec};
use nrf_softdevice::ble::{gatt_server, peripheral};
use nrf_softdevice::{raw, Softdevice};
use static_cell::StaticCell;

use crate::config::BLE_ADV_INTERVAL;
use crate::error::{BleError, Error};
use crate::ident;
use crate::indicator::ConnState;

/// Connectivity snapshot shared with the indicator loop. Single writer
/// (the advertiser task), read-only everywhere else.
static CONN_STATE: AtomicU8 = AtomicU8::new(ConnState::Off as u8);

static DEVICE_NAME: StaticCell<String<32>> = StaticCell::new();

/// Non-blocking snapshot of the current connectivity state.
pub fn current_state() -> Option<ConnState> {
    ConnState::from_raw(CONN_STATE.load(Ordering::Relaxed))
}

fn publish(state: ConnState) {
    CONN_STATE.store(state as u8, Ordering::Relaxed);
}

/// GATT server with no application services. The SoftDevice still
/// serves the GAP/GATT core attributes; connections exist only to be
/// observed by the indicator.
#[nrf_softdevice::gatt_server]
pub struct Server {}

/// 64-bit factory device id from the FICR.
fn hardware_id() -> [u8; 8] {
    let ficr = embassy_nrf::pac::FICR;
    let lo = ficr.deviceid(0).read();
    let hi = ficr.deviceid(1).read();
    let mut id = [0u8; 8];
    id[..4].copy_from_slice(&lo.to_le_bytes());
    id[4..].copy_from_slice(&hi.to_le_bytes());
    id
}

/// Enable the SoftDevice and spawn the runner and advertiser tasks.
///
/// After this returns, state transitions flow into [`current_state`].
pub fn start(spawner: &Spawner) {
    let name: &'static String<32> =
        DEVICE_NAME.init(ident::device_name(ident::short_id(&hardware_id())));

    let config = nrf_softdevice::Config {
        clock: Some(raw::nrf_clock_lf_cfg_t {
            source: raw::NRF_CLOCK_LF_SRC_RC as u8,
            rc_ctiv: 16,
            rc_temp_ctiv: 2,
            accuracy: raw::NRF_CLOCK_LF_ACCURACY_500_PPM as u8,
        }),
        conn_gap: Some(raw::ble_gap_conn_cfg_t {
            conn_count: 1,
            event_length: 24,
        }),
        conn_gatt: Some(raw::ble_gatt_conn_cfg_t { att_mtu: 256 }),
        gatts_attr_tab_size: Some(raw::ble_gatts_cfg_attr_tab_size_t {
            attr_tab_size: raw::BLE_GATTS_ATTR_TAB_SIZE_DEFAULT,
        }),
        gap_role_count: Some(raw::ble_gap_cfg_role_count_t {
            adv_set_count: 1,
            periph_role_count: 1,
            central_role_count: 0,
            central_sec_count: 0,
            _bitfield_1: raw::ble_gap_cfg_role_count_t::new_bitfield_1(0),
        }),
        gap_device_name: Some(raw::ble_gap_cfg_device_name_t {
            p_value: name.as_ptr() as _,
            current_len: name.len() as u16,
            max_len: name.len() as u16,
            write_perm: unsafe { mem::zeroed() },
            _bitfield_1: raw::ble_gap_cfg_device_name_t::new_bitfield_1(
                raw::BLE_GATTS_VLOC_STACK as u8,
            ),
        }),
        ..Default::default()
    };

    let sd = Softdevice::enable(&config);
    let server = Server::new(sd).expect("failed to register GATT server");

    info!("BLE: advertising as {}", name.as_str());

    spawner.must_spawn(softdevice_task(sd));
    spawner.must_spawn(advertiser_task(sd, server, name.as_str()));
}

#[embassy_executor::task]
async fn softdevice_task(sd: &'static Softdevice) -> ! {
    sd.run().await
}

/// Advertise → connected → disconnected, forever, publishing each
/// transition into the connectivity snapshot.
#[embassy_executor::task]
async fn advertiser_task(sd: &'static Softdevice, server: Server, name: &'static str) -> ! {
    // Flags + Complete Local Name; rebuilt once, reused every cycle.
    let mut adv_data: Vec<u8, 31> = Vec::new();
    let _ = adv_data.extend_from_slice(&[
        0x02,
        raw::BLE_GAP_AD_TYPE_FLAGS as u8,
        raw::BLE_GAP_ADV_FLAGS_LE_ONLY_GENERAL_DISC_MODE as u8,
    ]);
    let _ = adv_data.push(name.len() as u8 + 1);
    let _ = adv_data.push(raw::BLE_GAP_AD_TYPE_COMPLETE_LOCAL_NAME as u8);
    let _ = adv_data.extend_from_slice(name.as_bytes());

    loop {
        publish(ConnState::Advertising);

        let config = peripheral::Config {
            interval: BLE_ADV_INTERVAL,
            ..Default::default()
        };
        let adv = peripheral::ConnectableAdvertisement::ScannableUndirected {
            adv_data: &adv_data,
            scan_data: &[],
        };

        let conn = match peripheral::advertise_connectable(sd, adv, &config).await {
            Ok(conn) => conn,
            Err(_e) => {
                warn!("BLE: {}", Error::from(BleError::AdvertiseFailed));
                continue;
            }
        };

        info!("BLE: central connected");
        publish(ConnState::Connected);

        // Serves the (empty) GATT table until the central goes away.
        let reason = gatt_server::run(&conn, &server, |_| {}).await;
        info!("BLE: central disconnected: {}", reason);
    }
}

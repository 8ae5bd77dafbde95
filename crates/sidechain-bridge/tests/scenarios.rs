//! End-to-end scenarios: mainchain bytes in, sidechain boxes out.

use std::thread;

use sidechain_bridge::core::{ForwardTransferOutput, SidechainCreationOutput};
use sidechain_bridge::{
    BridgeConfig, BridgeError, CoinBox, ForwardTransfer, GenesisContext, MainchainOutput,
    MainchainOutputProcessor, SidechainCreation, SidechainId, SidechainRelatedMainchainOutput,
    TxHash,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// A known 20-byte key, placed in the first 20 bytes of the 32-byte
/// mainchain destination field.
const KNOWN_KEY: [u8; 20] = [
    0x5a, 0x17, 0x03, 0xc4, 0x88, 0x21, 0x9e, 0x40, 0x0b, 0x6f, 0xd2, 0x7c, 0x31, 0xa8, 0xe5,
    0x14, 0x99, 0x02, 0x6d, 0xbe,
];

#[test]
fn forward_transfer_scenario() {
    init_tracing();

    let mut destination = [0u8; 32];
    destination[..20].copy_from_slice(&KNOWN_KEY);

    let output = ForwardTransferOutput::new(100, destination, SidechainId([0x01; 32]));
    let ft = ForwardTransfer::new(output, TxHash([0u8; 32]), 0);
    let zen = ft.derive_box();

    assert_eq!(zen.value(), 100);

    let mut expected_owner = destination;
    expected_owner.reverse();
    assert_eq!(zen.proposition().0, expected_owner);
    // The known key ends up in the last 20 bytes, back to front.
    let mut reversed_key = KNOWN_KEY;
    reversed_key.reverse();
    assert_eq!(&zen.proposition().0[12..], &reversed_key);
}

#[test]
fn block_bytes_to_boxes() {
    init_tracing();

    let genesis = GenesisContext::global().unwrap();
    let sidechain_id = SidechainId([0x77; 32]);
    let config = BridgeConfig::default().with_sidechain_id(sidechain_id);
    let processor = MainchainOutputProcessor::new(config, genesis);

    let creation = SidechainCreation::new(
        SidechainCreationOutput::new(sidechain_id, 1000, 0, [0u8; 32]).unwrap(),
        TxHash([0x01; 32]),
        0,
    );
    let transfer = ForwardTransfer::new(
        ForwardTransferOutput::new(5_000, [0x42; 32], sidechain_id),
        TxHash([0x02; 32]),
        1,
    );
    let foreign = ForwardTransfer::new(
        ForwardTransferOutput::new(9, [0x43; 32], SidechainId([0x78; 32])),
        TxHash([0x02; 32]),
        2,
    );

    let records: Vec<Vec<u8>> = [
        MainchainOutput::from(creation),
        transfer.clone().into(),
        foreign.into(),
    ]
    .iter()
    .map(MainchainOutput::tagged_bytes)
    .collect();

    let derived = processor.process_tagged(&records).unwrap();
    assert_eq!(derived.len(), 2);
    assert_eq!(derived[0].sidechain_box.as_forger(), Some(genesis.forger_box()));
    assert_eq!(derived[1].sidechain_box.as_zen(), Some(&transfer.derive_box()));
    assert_eq!(derived[1].output_id, transfer.identity_hash());
}

#[test]
fn genesis_box_shared_across_threads() {
    let handles: Vec<_> = (0..8u8)
        .map(|i| {
            thread::spawn(move || {
                let genesis = GenesisContext::global().unwrap();
                let sc = SidechainCreation::new(
                    SidechainCreationOutput::new(SidechainId([i; 32]), u32::from(i) + 1, 0, [i; 32])
                        .unwrap(),
                    TxHash([i; 32]),
                    u32::from(i),
                );
                sc.to_box(genesis)
            })
        })
        .collect();

    let boxes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for b in &boxes {
        assert_eq!(b, &boxes[0]);
        assert_eq!(b.nonce, 42);
        assert_eq!(b.value, 1_000_000);
    }
}

#[test]
fn truncated_record_is_malformed() {
    let ft = ForwardTransfer::new(
        ForwardTransferOutput::new(1, [0x01; 32], SidechainId([0x01; 32])),
        TxHash([0x01; 32]),
        0,
    );
    let bytes = ft.bytes();
    assert_eq!(bytes.len(), 72 + 36);

    for len in [0, 1, 71, 72, 107] {
        let err = ForwardTransfer::parse_bytes(&bytes[..len]).unwrap_err();
        assert!(matches!(err, BridgeError::MalformedInput(_)), "len {}", len);
    }
}

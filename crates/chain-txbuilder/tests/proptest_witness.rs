use proptest::prelude::*;

use chain_primitives::HexBytes;
use chain_txbuilder::{
    DataWitness, KeyId, SignatureWitness, SigningInstruction, WitnessComponent,
};

fn arb_hex_bytes(max_len: usize) -> impl Strategy<Value = HexBytes> {
    prop::collection::vec(any::<u8>(), 0..max_len).prop_map(HexBytes::from)
}

fn arb_key_id() -> impl Strategy<Value = KeyId> {
    ("[a-z0-9]{1,20}", prop::collection::vec(any::<u32>(), 0..5))
        .prop_map(|(xpub, path)| KeyId::new(xpub, path))
}

fn arb_component() -> impl Strategy<Value = WitnessComponent> {
    let arb_data = arb_hex_bytes(64)
        .prop_map(|data| WitnessComponent::Data(DataWitness { data }));
    let arb_signature = (
        0usize..5,
        prop::collection::vec(arb_key_id(), 0..4),
        arb_hex_bytes(128),
        prop::collection::vec(arb_hex_bytes(64), 0..4),
    )
        .prop_map(|(quorum, keys, program, sigs)| {
            let mut sw = SignatureWitness::new(keys, quorum);
            sw.program = program;
            sw.sigs = sigs;
            WitnessComponent::Signature(sw)
        });
    prop_oneof![arb_data, arb_signature]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Every witness component survives a JSON round-trip unchanged,
    /// including empty signature slots.
    #[test]
    fn component_json_roundtrip(component in arb_component()) {
        let json = serde_json::to_string(&component).unwrap();
        let back: WitnessComponent = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, component);
    }

    /// Signing instructions round-trip with their position and component
    /// ordering intact.
    #[test]
    fn instruction_json_roundtrip(
        position in 0usize..16,
        components in prop::collection::vec(arb_component(), 0..4),
    ) {
        let instruction = SigningInstruction { position, witness_components: components };
        let json = serde_json::to_string(&instruction).unwrap();
        let back: SigningInstruction = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.position, instruction.position);
        prop_assert_eq!(back.witness_components, instruction.witness_components);
    }
}

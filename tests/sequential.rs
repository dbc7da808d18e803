use sequential_model::{
    ErrorKind, ModelErr, build_model,
    arch::{Sequential, activations::ActFn, layers::LayerSpec},
    configs::{Adapter, LayerConfig, ModelConfig},
    initialization::InitSpec,
};

fn widths(model: &Sequential) -> Vec<usize> {
    model.iter().map(LayerSpec::output_width).collect()
}

#[test]
fn reference_model() {
    let model = build_model().unwrap();

    assert_eq!(model.len(), 2);
    assert_eq!(widths(&model), [2, 3]);
    assert!(model.iter().all(|layer| layer.act_fn() == ActFn::Relu));

    let names: Vec<_> = model.iter().map(LayerSpec::name).collect();
    assert_eq!(names, [Some("layer1"), Some("layer2")]);
}

#[test]
fn building_preserves_order() {
    let layers: Vec<_> = [5, 1, 4, 2, 3]
        .into_iter()
        .enumerate()
        .map(|(i, width)| LayerSpec::dense(width, ActFn::ALL[i]).named(format!("l{i}")))
        .collect();

    let model = Sequential::new(layers.clone()).unwrap();
    assert_eq!(model.layers(), layers.as_slice());
}

#[test]
fn duplicate_name_is_a_configuration_error() {
    let res = Sequential::new([
        LayerSpec::dense(2, ActFn::Relu).named("layer1"),
        LayerSpec::dense(3, ActFn::Relu).named("layer2"),
        LayerSpec::dense(4, ActFn::Relu).named("layer1"),
    ]);

    let err = res.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(matches!(
        err,
        ModelErr::DuplicateName { ref name, first: 0, second: 2 } if name == "layer1"
    ));
}

#[test]
fn zero_width_is_a_validation_error() {
    let err = Sequential::new([LayerSpec::dense(0, ActFn::Relu)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn building_twice_gives_equal_independent_models() {
    let a = build_model().unwrap();
    let b = build_model().unwrap();

    assert_eq!(a, b);
    assert!(!std::ptr::eq(a.layers().as_ptr(), b.layers().as_ptr()));
}

#[test]
fn empty_model_builds() {
    let model = Sequential::builder().build().unwrap();

    assert!(model.is_empty());
    assert_eq!(model.len(), 0);
}

#[test]
fn config_and_builder_agree() {
    let config = ModelConfig::Sequential {
        layers: vec![
            LayerConfig::dense(2, "relu", Some("layer1")),
            LayerConfig::dense(3, "relu", Some("layer2")),
        ],
    };

    let model = Adapter::new().adapt_model(&config).unwrap();
    assert_eq!(model, build_model().unwrap());
}

#[test]
fn seeded_initialization_is_deterministic() {
    let model = build_model().unwrap();

    let a = model.initialize(4, Some(42)).unwrap();
    let b = model.initialize(4, Some(42)).unwrap();
    let c = model.initialize(4, Some(43)).unwrap();

    assert_eq!(a.params(), b.params());
    assert_ne!(a.params(), c.params());
    assert_eq!(a.model(), &model);
}

#[test]
fn initialization_resolves_shapes() {
    let initialized = build_model().unwrap().initialize(4, Some(0)).unwrap();

    assert_eq!(initialized.input_width(), 4);
    assert_eq!(initialized.shapes(), [(4, 2), (2, 3)]);
    assert_eq!(initialized.size(), (4 + 1) * 2 + (2 + 1) * 3);

    let (weights, biases) = initialized.view_params(1).unwrap();
    assert_eq!(weights.dim(), (2, 3));
    assert_eq!(biases.len(), 3);
}

#[test]
fn xavier_kernels_stay_in_range() {
    let initialized = build_model().unwrap().initialize(4, Some(1)).unwrap();

    for (i, &(n, m)) in initialized.shapes().iter().enumerate() {
        let range = (6. / (n + m) as f32).sqrt();
        let (weights, _) = initialized.view_params(i).unwrap();

        assert!(weights.iter().all(|w| (-range..=range).contains(w)));
    }
}

#[test]
fn custom_initializers() {
    let model = Sequential::new([
        LayerSpec::dense(1, ActFn::Sigmoid)
            .with_kernel_init(InitSpec::Const { value: 0.5 })
            .with_bias_init(InitSpec::Const { value: 0.25 }),
    ])
    .unwrap();

    let initialized = model.initialize(2, Some(0)).unwrap();
    assert_eq!(initialized.params(), [0.5, 0.5, 0.25]);
}

#[test]
fn oversized_layer_fails_initialization_without_panicking() {
    let model = Sequential::new([LayerSpec::dense(usize::MAX, ActFn::Relu)]).unwrap();
    assert_eq!(model.size(1), None);

    let err = model.initialize(1, Some(0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Initialization);
    assert!(matches!(err, ModelErr::SizeOverflow { layer: 0, .. }));
}

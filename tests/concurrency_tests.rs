mod common;

use common::fixtures::*;
use common::{GeneratedPdf, TestResult, request_from};
use gtd_print::{DeclarationRenderer, RenderRequest, RendererConfig};
use std::sync::Arc;
use std::thread;

#[test]
fn test_identical_requests_give_identical_bytes() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let request = request_from(simple_request(7))?;
    let first = gtd_print::render_declaration(&request)?;
    let second = gtd_print::render_declaration(&request)?;
    assert_eq!(first, second);

    // A separately built renderer with the same settings agrees as well.
    let other = DeclarationRenderer::new(RendererConfig::default())?;
    assert_eq!(other.assemble(&request)?, first);
    Ok(())
}

#[test]
fn test_output_carries_no_timestamps() -> TestResult {
    let pdf = GeneratedPdf::from_bytes(gtd_print::render_declaration_json("{}")?)?;
    assert!(pdf.doc.trailer.get(b"Info").is_err());
    assert!(pdf.doc.trailer.get(b"ID").is_err());
    Ok(())
}

#[test]
fn test_shared_renderer_across_threads() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let renderer = Arc::new(DeclarationRenderer::new(RendererConfig::default())?);
    let requests: Vec<RenderRequest> = (0..8)
        .map(|n| request_from(simple_request(n)))
        .collect::<Result<_, _>>()?;
    let sequential = requests
        .iter()
        .map(|r| renderer.assemble(r))
        .collect::<Result<Vec<_>, _>>()?;

    let handles: Vec<_> = requests
        .into_iter()
        .map(|request| {
            let renderer = Arc::clone(&renderer);
            thread::spawn(move || renderer.assemble(&request).map_err(|e| e.to_string()))
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        let bytes = handle.join().map_err(|_| "render thread panicked")??;
        assert_eq!(bytes, sequential[index], "request {} differs across threads", index);
    }
    Ok(())
}

#[test]
fn test_default_renderer_is_shared() -> TestResult {
    let a = gtd_print::default_renderer()?;
    let b = gtd_print::default_renderer()?;
    assert!(std::ptr::eq(a, b));
    Ok(())
}

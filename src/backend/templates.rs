//! Companion extensions emitted next to the constant groups.
//!
//! Each template exists once per [`Platform`]; [`cross_platform`] pairs the two variants under the configured
//! platform condition.

use crate::emit::{Argument, Conditional, EmitConfig, Extension, Line, Method, MethodKind, Unit};

/// Target UI framework of one branch of a platform conditional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// UIKit (iOS, tvOS).
    UiKit,
    /// AppKit (macOS).
    AppKit,
}

impl Platform {
    pub fn framework(self) -> &'static str {
        match self {
            Platform::UiKit => "UIKit",
            Platform::AppKit => "AppKit",
        }
    }

    fn prefixed(self, name: &str) -> String {
        match self {
            Platform::UiKit => format!("UI{name}"),
            Platform::AppKit => format!("NS{name}"),
        }
    }
}

/// Wrap the UIKit and AppKit variants of a template in the platform conditional.
pub fn cross_platform(config: &EmitConfig, template: impl Fn(Platform) -> Unit) -> Conditional {
    Conditional::new(
        config.platform_condition.as_str(),
        template(Platform::UiKit),
        template(Platform::AppKit),
    )
}

/// `import UIKit` / `import AppKit`.
pub fn imports(config: &EmitConfig) -> Conditional {
    cross_platform(config, |platform| Line::new(format!("import {}", platform.framework())).into()).with_line_breaks()
}

/// Image initializer taking an `Image` case.
pub fn image_extension(platform: Platform) -> Unit {
    Extension::new(platform.prefixed("Image"))
        .with_method(
            Method::new(MethodKind::Convenience)
                .with_argument(Argument::labeled("named", "name", "Image"))
                .with_body_lines([Line::new("self.init(named: name.rawValue)!")]),
        )
        .into()
}

/// Storyboard initializer taking a `Storyboard` case, plus typed view controller instantiation.
pub fn storyboard_extension(platform: Platform) -> Unit {
    let instantiate = match platform {
        Platform::UiKit => "instantiateViewControllerWithIdentifier",
        Platform::AppKit => "instantiateControllerWithIdentifier",
    };

    Extension::new(platform.prefixed("Storyboard"))
        .with_method(
            Method::new(MethodKind::Convenience)
                .with_arguments([
                    Argument::new("identifier", "Storyboard"),
                    Argument::new("bundle", "NSBundle? = nil"),
                ])
                .with_body_lines([Line::new("self.init(name: identifier.rawValue, bundle: bundle)")]),
        )
        .with_method(
            Method::named(MethodKind::Instance, "instantiateViewController<T>")
                .with_arguments([
                    Argument::new("viewController", "ViewController"),
                    Argument::new("type", "T.Type"),
                ])
                .returning("T")
                .with_body_lines([Line::new(format!(
                    "return self.{instantiate}(viewController.rawValue) as! T"
                ))]),
        )
        .into()
}

/// Segue initializer taking a `Segue` case, plus a typed accessor for the segue identifier.
pub fn segue_extension(platform: Platform) -> Unit {
    let view_controller = platform.prefixed("ViewController");
    let init = "self.init(identifier: segue.rawValue, source: source, destination: destination";

    Extension::new(platform.prefixed("StoryboardSegue"))
        .with_method(
            Method::new(MethodKind::Convenience)
                .with_arguments([
                    Argument::new("segue", "Segue"),
                    Argument::new("source", view_controller.as_str()),
                    Argument::new("destination", view_controller.as_str()),
                    Argument::new("performHandler", "(() -> ())? = nil"),
                ])
                .with_body_lines([
                    Line::new("if performHandler == nil {"),
                    Line::nested(format!("{init})"), 1),
                    Line::new("} else {"),
                    Line::nested(format!("{init}, performHandler: performHandler!)"), 1),
                    Line::new("}"),
                ]),
        )
        .with_method(
            Method::named(MethodKind::Instance, "segue")
                .returning("Segue")
                .with_body_lines([
                    Line::new("if let identifier = self.identifier {"),
                    Line::nested("return Segue(rawValue: identifier)!", 1),
                    Line::new("} else {"),
                    Line::nested(
                        "fatalError(\"Rigid: Could not retrieve identifier for storyboard segue. \
                         Ensure that you have assigned an identifier to this segue: \\(self)\")",
                        1,
                    ),
                    Line::new("}"),
                ]),
        )
        .into()
}

/// Nib initializer taking a `Nib` case; on UIKit also typed cell dequeueing for tables and collections.
pub fn nib_extensions(platform: Platform) -> Unit {
    let nib_body = match platform {
        Platform::UiKit => "self.init(nibName: nib.rawValue, bundle: bundle)",
        Platform::AppKit => "self.init(nibNamed: nib.rawValue, bundle: bundle)!",
    };
    let nib = Extension::new(platform.prefixed("Nib")).with_method(
        Method::new(MethodKind::Convenience)
            .with_arguments([Argument::new("nib", "Nib"), Argument::new("bundle", "NSBundle? = nil")])
            .with_body_lines([Line::new(nib_body)]),
    );

    match platform {
        Platform::UiKit => Unit::aggregate([
            nib.into(),
            dequeue_extension("UITableView", "dequeueReusableCellWithIdentifier").into(),
            dequeue_extension("UICollectionView", "dequeueReusableCellWithReuseIdentifier").into(),
        ]),
        Platform::AppKit => Unit::aggregate([nib.into()]),
    }
}

fn dequeue_extension(name: &str, dequeue: &str) -> Extension {
    Extension::new(name).with_method(
        Method::named(MethodKind::Instance, "dequeueReusableCellWithNib<T>")
            .with_arguments([
                Argument::new("nib", "Nib"),
                Argument::labeled("forIndexPath", "indexPath", "NSIndexPath"),
            ])
            .returning("T")
            .with_body_lines([Line::new(format!(
                "return self.{dequeue}(nib.rawValue, forIndexPath: indexPath) as! T"
            ))]),
    )
}
